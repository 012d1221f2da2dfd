use crate::model::proposal::{Proposal, ProposalId};

/// Find the plurality winner among `proposals`, indexed by position.
///
/// Proposals are scanned in ascending index order and a later proposal only
/// takes the lead with strictly more votes, so ties go to the lowest index.
/// An empty slice yields index 0.
pub fn plurality_winner(proposals: &[Proposal]) -> ProposalId {
    let mut winner = 0;
    let mut max_votes = 0;
    for (index, proposal) in proposals.iter().enumerate() {
        if proposal.vote_count > max_votes {
            max_votes = proposal.vote_count;
            winner = index;
        }
    }
    // Proposal indices are handed out as `ProposalId`s, so they always fit.
    winner as ProposalId
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_counts(counts: &[u64]) -> Vec<Proposal> {
        counts
            .iter()
            .map(|&count| Proposal {
                description: format!("{count} votes"),
                vote_count: count,
            })
            .collect()
    }

    #[test]
    fn clear_winner() {
        assert_eq!(plurality_winner(&with_counts(&[0, 1, 2])), 2);
        assert_eq!(plurality_winner(&with_counts(&[5, 1, 2])), 0);
        assert_eq!(plurality_winner(&with_counts(&[0, 3, 2, 1])), 1);
    }

    #[test]
    fn ties_go_to_lowest_index() {
        assert_eq!(plurality_winner(&with_counts(&[0, 2, 2])), 1);
        assert_eq!(plurality_winner(&with_counts(&[1, 3, 0, 3, 3])), 1);
        assert_eq!(plurality_winner(&with_counts(&[4, 4])), 0);
    }

    #[test]
    fn no_votes() {
        assert_eq!(plurality_winner(&with_counts(&[0, 0, 0])), 0);
        assert_eq!(plurality_winner(&[]), 0);
    }
}
