//! a580lib — кодирование, проверка и разбор записей PTU A580 (фиксированная ширина полей).

pub mod analyze;
pub mod archive;
pub mod encode;
pub mod error;
pub mod layout;
pub mod model;
pub mod naming;
pub mod numeric;
pub mod traits;
pub mod validate;

pub mod formats {
    pub mod csv;
    pub mod json;
}

pub use analyze::analyze;
pub use archive::write_archive;
pub use encode::encode;
pub use naming::{derive_archive_name, derive_filename, derive_suggested_external_name};
pub use validate::validate;
