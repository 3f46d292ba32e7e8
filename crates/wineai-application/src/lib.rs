pub mod session;
pub mod sommelier_usecase;

pub use session::ChatSession;
pub use sommelier_usecase::{
    PROVIDER_ERROR_REPLY, SommelierUseCase, TurnFailure, TurnOutcome, TurnReply,
    UNEXPECTED_ERROR_REPLY,
};
