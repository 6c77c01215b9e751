pub mod info;
pub mod io;
pub mod regroup;
pub mod transform;

pub use info::*;
pub use io::*;
pub use regroup::*;
pub use transform::*;
