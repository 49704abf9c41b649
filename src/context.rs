use crate::config;
use crate::output::Output;

#[derive(Debug)]
pub struct AppContext {
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(json: bool, verbose: u8) -> Self {
        config::init_logging(verbose);
        let output = Output::new(json);

        Self { output }
    }
}
