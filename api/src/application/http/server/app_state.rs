use std::sync::Arc;

use platelens_core::application::PlateLensService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: PlateLensService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: PlateLensService) -> Self {
        Self { args, service }
    }
}
