/// Single-token decode command.
pub mod field;
/// Person flag report command.
pub mod inspect;
/// Person model shared by the document commands.
pub mod person;
/// Person decode/encode command.
pub mod roundtrip;
/// Input loading helpers.
pub mod util;
