/// Types that can be restored to the state they were in when they were
/// constructed. For [`ChunkParser`](crate::ChunkParser) this is the
/// re-initialization step required between documents: resetting is the only
/// way to reuse a parser after it has reported a verdict.
pub trait Reset {
    /// Reset `self` to the state it was in when it was constructed
    fn reset(&mut self);
}
