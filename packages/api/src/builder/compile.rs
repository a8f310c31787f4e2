//! Compilation into the runnable state

use pathor_engine::error::QueryResult;
use pathor_engine::query::Compiler;

use super::core::{Compiled, Pathor, Uncompiled};

impl Pathor<Uncompiled> {
    /// Compile the query
    ///
    /// # Errors
    ///
    /// Returns the `QueryError` from the compiler: syntax errors, unknown
    /// functions, invalid function names or configuration. The failure is
    /// also logged at error level.
    pub fn compile(self) -> QueryResult<Pathor<Compiled>> {
        let Uncompiled {
            expression,
            functions,
            config,
            semantics,
        } = self.state;

        let compiler = Compiler::new(functions.build())
            .with_config(config)
            .with_semantics(semantics);

        match compiler.compile(&expression) {
            Ok(query) => Ok(Pathor {
                state: Compiled { query },
            }),
            Err(error) => {
                log::error!("Failed to compile query: {error}");
                Err(error)
            }
        }
    }
}
