// app/src/state.rs
use crate::config::AppConfig;
use catalog::ProductUsecase;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub products: Arc<dyn ProductUsecase>,
  pub config: Arc<AppConfig>, // Share loaded config
}
