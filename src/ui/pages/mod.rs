pub mod workbench;

pub use workbench::WorkbenchPage;
