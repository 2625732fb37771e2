use soroban_sdk::Env;

use crate::{storage, types::Winner};

/// Picks the `(id, count)` pair with the greatest count.
///
/// A later entry only replaces the leader on a strictly greater count, so ties
/// go to the first (lowest id) proposal reaching the maximum.
pub fn first_max<I>(counts: I) -> Option<(u32, u32)>
where
    I: IntoIterator<Item = (u32, u32)>,
{
    let mut best: Option<(u32, u32)> = None;
    for (id, count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((id, count)),
        }
    }
    best
}

/// Scans every stored proposal in id order. `None` when no proposal exists.
pub fn compute_winner(env: &Env) -> Option<Winner> {
    let count = storage::get_proposal_count(env);
    let scores = (0..count).filter_map(|id| {
        storage::get_proposal(env, id).map(|proposal| (proposal.id, proposal.vote_count))
    });
    let (proposal_id, _) = first_max(scores)?;

    let proposal = storage::get_proposal(env, proposal_id)?;
    Some(Winner {
        proposal_id: proposal.id,
        description: proposal.description,
        vote_count: proposal.vote_count,
    })
}
