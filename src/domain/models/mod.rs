mod author;
mod history;
mod message;
mod modality;
mod response;

pub use author::*;
pub use history::*;
pub use message::*;
pub use modality::*;
pub use response::*;
