mod responder;

pub use responder::{
    ChatResponder, INAPPROPRIATE_CONTENT, INAPPROPRIATE_QUESTION, STOP_SEQUENCES, TEMPERATURE,
    conversation_seed,
};
