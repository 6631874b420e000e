pub mod confirmation;
pub mod entities;
pub mod routing;
pub mod stats;
pub mod table;
