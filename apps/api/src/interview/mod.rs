// Discovery interview: one model call per turn, completion detected from
// the model's own reply.

pub mod handlers;
pub mod prompts;
pub mod reply;
