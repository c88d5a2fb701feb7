use sources::SourceRegistry;

#[derive(Clone)]
pub struct AppState {
    pub registry: SourceRegistry,
}

impl AppState {
    pub fn new(registry: SourceRegistry) -> Self {
        Self { registry }
    }
}
