//! The five diagram kinds.

pub mod class;
pub mod component;
pub mod package;
pub mod sequence;
pub mod usecase;

pub use class::ClassDiagram;
pub use component::ComponentDiagram;
pub use package::PackageDiagram;
pub use sequence::SequenceDiagram;
pub use usecase::UseCaseDiagram;
