pub mod constants;
mod deploy;
mod file_wrapper;
mod rectangle;
mod roster;
mod unit;
mod utility;
mod vector;


pub use deploy::deploy_internal;
pub use file_wrapper::FileWrapper;
pub use rectangle::Rectangle;
pub use roster::{Roster, UnitId};
pub use unit::{DotEffect, Ranged, Unit, UnitKind};
pub use utility::Error;
