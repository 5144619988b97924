//! Mapping between the canonical vote enum and the wire vote enum.

use daocodec_core::{TranscodeError, VoteOption};
use daocodec_proto::gov;

/// Canonical vote → wire vote.
pub fn cw_vote_to_gov(vote: VoteOption) -> gov::VoteOption {
    match vote {
        VoteOption::Yes => gov::VoteOption::Yes,
        VoteOption::Abstain => gov::VoteOption::Abstain,
        VoteOption::No => gov::VoteOption::No,
        VoteOption::NoWithVeto => gov::VoteOption::NoWithVeto,
    }
}

/// Raw wire vote value → canonical vote.
///
/// `VOTE_OPTION_UNSPECIFIED` and out-of-range values have no canonical
/// representation.
pub fn gov_vote_to_cw(option: i32) -> Result<VoteOption, TranscodeError> {
    match gov::VoteOption::try_from(option) {
        Ok(gov::VoteOption::Yes) => Ok(VoteOption::Yes),
        Ok(gov::VoteOption::Abstain) => Ok(VoteOption::Abstain),
        Ok(gov::VoteOption::No) => Ok(VoteOption::No),
        Ok(gov::VoteOption::NoWithVeto) => Ok(VoteOption::NoWithVeto),
        Ok(gov::VoteOption::Unspecified) | Err(_) => Err(TranscodeError::malformed(format!(
            "unknown vote option {option}"
        ))),
    }
}
