//! Archive descriptor documents: the structural `meta.xml` and the
//! dataset-level `eml.xml`.

mod eml;
mod meta;

pub use eml::write_eml;
pub use meta::write_meta;
