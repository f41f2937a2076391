pub mod carousel;
pub mod contact;
pub mod gallery;
pub mod nav;
pub mod sections;
