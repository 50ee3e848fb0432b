pub mod mock_service;
pub mod traits;
pub mod types;

pub use mock_service::MockCitiesService;
pub use traits::CitiesService;
pub use types::MockOptions;
