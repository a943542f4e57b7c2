// Career matching engine.
// Pure, synchronous scoring over the in-memory catalog: skill normalization,
// skill overlap, interest relevance, experience alignment and ranking.

pub mod experience;
pub mod handlers;
pub mod interests;
pub mod normalizer;
pub mod ranker;
pub mod skills;
pub mod vocabulary;
