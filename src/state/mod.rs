pub mod carousel;
pub mod contact;
pub mod gallery;
pub mod navigation;
pub mod ui;

pub use carousel::CarouselState;
pub use contact::{ContactPayload, ContactState, SubmitError, SubmitStatus};
pub use gallery::GalleryState;
pub use navigation::{NavigationSync, SectionGeometry};
pub use ui::UiState;
