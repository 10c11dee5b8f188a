use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recognition::{entities::RecognitionResult, value_objects::RecognizeFoodInput},
};

/// Stands in for the response time of a real vision model.
#[cfg_attr(test, mockall::automock)]
pub trait ModelLatency: Send + Sync {
    fn wait(&self) -> impl Future<Output = ()> + Send;
}

/// Service trait for food recognition
#[cfg_attr(test, mockall::automock)]
pub trait FoodRecognitionService: Send + Sync {
    /// Always yields a best-effort label; callers apply their own confidence cutoff.
    fn recognize_food(
        &self,
        input: RecognizeFoodInput,
    ) -> impl Future<Output = Result<RecognitionResult, CoreError>> + Send;
}
