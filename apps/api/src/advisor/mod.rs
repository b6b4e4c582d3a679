// Generative career suggestions. All LLM traffic goes through the
// TextGenerator trait in llm_client — no direct API calls here.

pub mod handlers;
pub mod prompts;
