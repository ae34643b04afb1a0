use primitives::Campaign;

pub const WEIGHT_ML: f64 = 0.1;
pub const WEIGHT_COMPLETION: f64 = 0.2;
pub const WEIGHT_PROFIT: f64 = 0.7;

/// An eligible campaign annotated with the client's recorded state towards
/// it, the unit the scoring works on.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub campaign: Campaign,
    pub impressed: bool,
    pub clicked: bool,
    pub ml_score: f64,
}

/// A [`Candidate`]'s campaign with its final score.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub campaign: Campaign,
    pub score: f64,
}

impl Candidate {
    /// Money still to be made from this client. Each cost counts only while
    /// the matching event has not been recorded yet.
    fn raw_profit(&self) -> f64 {
        let impression = if self.impressed {
            0.0
        } else {
            self.campaign.cost_per_impression
        };
        let click = if self.clicked {
            0.0
        } else {
            self.campaign.cost_per_click
        };

        impression + click
    }

    /// How far the campaign is from exhausting its caps. Each half only
    /// counts while the client has not generated that event type yet.
    fn raw_completion(&self) -> f64 {
        let impression = if self.impressed {
            0.0
        } else {
            completion_term(
                self.campaign.impressions_count,
                self.campaign.impressions_limit,
            )
        };
        let click = if self.clicked {
            0.0
        } else {
            completion_term(self.campaign.clicks_count, self.campaign.clicks_limit)
        };

        impression + click
    }
}

/// A zero limit contributes nothing, there is no cap left to fill.
fn completion_term(count: u32, limit: u32) -> f64 {
    if limit == 0 {
        return 0.0;
    }

    0.5 * (1.0 - count as f64 / limit as f64)
}

/// Scores every candidate relative to the rest of the pool and returns them
/// ordered best first. Ties go to the lower campaign id, which keeps the
/// ranking deterministic.
///
/// Each term is normalized by the pool's maximum before the weighting, so a
/// score only has meaning within the pool it was computed in.
pub fn rank(candidates: Vec<Candidate>) -> Vec<ScoredCandidate> {
    let max_profit = candidates
        .iter()
        .map(Candidate::raw_profit)
        .fold(0.0, f64::max);
    let max_completion = candidates
        .iter()
        .map(Candidate::raw_completion)
        .fold(0.0, f64::max);
    let max_ml = candidates
        .iter()
        .map(|candidate| candidate.ml_score)
        .fold(0.0, f64::max);

    let mut scored = candidates
        .into_iter()
        .map(|candidate| {
            let profit = normalize(candidate.raw_profit(), max_profit);
            let completion = normalize(candidate.raw_completion(), max_completion);
            let ml = normalize(candidate.ml_score, max_ml);

            ScoredCandidate {
                campaign: candidate.campaign,
                score: WEIGHT_ML * ml + WEIGHT_COMPLETION * completion + WEIGHT_PROFIT * profit,
            }
        })
        .collect::<Vec<_>>();

    scored.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.campaign.campaign_id.cmp(&b.campaign.campaign_id))
    });

    scored
}

/// `raw / max` with a guard for an all-zero pool.
fn normalize(raw: f64, max: f64) -> f64 {
    if raw == 0.0 || max == 0.0 {
        return 0.0;
    }

    raw / max
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use primitives::{test_util::DUMMY_CAMPAIGN, CampaignId};

    use super::*;

    fn candidate(campaign: Campaign) -> Candidate {
        Candidate {
            campaign,
            impressed: false,
            clicked: false,
            ml_score: 0.0,
        }
    }

    #[test]
    fn recorded_events_remove_their_cost_from_the_profit() {
        let fresh = candidate(DUMMY_CAMPAIGN.clone());
        assert_eq!(5.5, fresh.raw_profit());

        let impressed = Candidate {
            impressed: true,
            ..fresh.clone()
        };
        assert_eq!(5.0, impressed.raw_profit());

        let exhausted = Candidate {
            impressed: true,
            clicked: true,
            ..fresh
        };
        assert_eq!(0.0, exhausted.raw_profit());
    }

    #[test]
    fn completion_shrinks_as_the_caps_fill_up() {
        let fresh = candidate(DUMMY_CAMPAIGN.clone());
        // 0.5 * 1 + 0.5 * 1
        assert_eq!(1.0, fresh.raw_completion());

        let half_impressed = candidate(Campaign {
            impressions_count: 50,
            ..DUMMY_CAMPAIGN.clone()
        });
        // 0.5 * 0.5 + 0.5 * 1
        assert_eq!(0.75, half_impressed.raw_completion());

        let zero_limits = candidate(Campaign {
            impressions_limit: 0,
            clicks_limit: 0,
            ..DUMMY_CAMPAIGN.clone()
        });
        assert_eq!(0.0, zero_limits.raw_completion());
    }

    #[test]
    fn recorded_events_zero_their_half_of_the_completion() {
        let fresh = candidate(DUMMY_CAMPAIGN.clone());
        assert_eq!(1.0, fresh.raw_completion());

        let impressed = Candidate {
            impressed: true,
            ..fresh.clone()
        };
        assert_eq!(0.5, impressed.raw_completion());

        let exhausted = Candidate {
            impressed: true,
            clicked: true,
            ..fresh
        };
        assert_eq!(0.0, exhausted.raw_completion());
    }

    #[test]
    fn completion_does_not_depend_on_the_costs() {
        // equal profit sums and equal cap usage must tie on every term, the
        // cost split between impressions and clicks carries no weight
        let impression_heavy = candidate(Campaign {
            campaign_id: CampaignId::new(),
            cost_per_impression: 9.0,
            cost_per_click: 1.0,
            impressions_count: 50,
            ..DUMMY_CAMPAIGN.clone()
        });
        let click_heavy = candidate(Campaign {
            campaign_id: CampaignId::new(),
            cost_per_impression: 1.0,
            cost_per_click: 9.0,
            impressions_count: 50,
            ..DUMMY_CAMPAIGN.clone()
        });
        assert_eq!(
            impression_heavy.raw_completion(),
            click_heavy.raw_completion()
        );

        let lower_id = impression_heavy
            .campaign
            .campaign_id
            .min(click_heavy.campaign.campaign_id);

        let ranked = rank(vec![impression_heavy, click_heavy]);
        assert_eq!(ranked[0].score, ranked[1].score);
        assert_eq!(lower_id, ranked[0].campaign.campaign_id);
    }

    #[test]
    fn an_exhausted_candidate_loses_to_a_fresh_one_on_completion_alone() {
        // zero costs keep the profit term out of the picture
        let exhausted = Candidate {
            impressed: true,
            clicked: true,
            ..candidate(Campaign {
                campaign_id: "00000000-0000-0000-0000-000000000000"
                    .parse()
                    .expect("Should parse CampaignId"),
                cost_per_impression: 0.0,
                cost_per_click: 0.0,
                ..DUMMY_CAMPAIGN.clone()
            })
        };
        let fresh = candidate(Campaign {
            campaign_id: "ffffffff-ffff-ffff-ffff-ffffffffffff"
                .parse()
                .expect("Should parse CampaignId"),
            cost_per_impression: 0.0,
            cost_per_click: 0.0,
            ..DUMMY_CAMPAIGN.clone()
        });

        assert_eq!(0.0, exhausted.raw_completion());

        let ranked = rank(vec![exhausted, fresh.clone()]);
        assert_eq!(fresh.campaign.campaign_id, ranked[0].campaign.campaign_id);
        assert!(ranked[0].score > ranked[1].score);
    }

    #[test]
    fn the_most_profitable_campaign_ranks_first() {
        let cheap = candidate(Campaign {
            campaign_id: CampaignId::new(),
            cost_per_impression: 1.0,
            cost_per_click: 1.0,
            ..DUMMY_CAMPAIGN.clone()
        });
        let expensive = candidate(Campaign {
            campaign_id: CampaignId::new(),
            cost_per_impression: 2.0,
            cost_per_click: 10.0,
            ..DUMMY_CAMPAIGN.clone()
        });

        let ranked = rank(vec![cheap.clone(), expensive.clone()]);

        assert_eq!(
            expensive.campaign.campaign_id,
            ranked[0].campaign.campaign_id
        );
        assert_eq!(cheap.campaign.campaign_id, ranked[1].campaign.campaign_id);
        assert!(ranked[0].score > ranked[1].score);
    }

    #[test]
    fn ties_go_to_the_lower_campaign_id() {
        let first = candidate(Campaign {
            campaign_id: CampaignId::new(),
            ..DUMMY_CAMPAIGN.clone()
        });
        let second = candidate(Campaign {
            campaign_id: CampaignId::new(),
            ..DUMMY_CAMPAIGN.clone()
        });

        let lower_id = first
            .campaign
            .campaign_id
            .min(second.campaign.campaign_id);

        let ranked = rank(vec![first.clone(), second.clone()]);
        assert_eq!(ranked[0].score, ranked[1].score);
        assert_eq!(lower_id, ranked[0].campaign.campaign_id);

        // the order of the input pool does not matter
        let reversed = rank(vec![second, first]);
        assert_eq!(lower_id, reversed[0].campaign.campaign_id);
    }

    #[test]
    fn an_empty_pool_ranks_to_nothing() {
        assert!(rank(vec![]).is_empty());
    }

    #[test]
    fn all_zero_pools_do_not_divide_by_zero() {
        let free = candidate(Campaign {
            cost_per_impression: 0.0,
            cost_per_click: 0.0,
            impressions_limit: 0,
            clicks_limit: 0,
            ..DUMMY_CAMPAIGN.clone()
        });

        let ranked = rank(vec![free]);
        assert_eq!(0.0, ranked[0].score);
    }
}
