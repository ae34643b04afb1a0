use primitives::{Campaign, Client, Day};

/// Caps may overshoot their limit by this factor before the campaign stops
/// being served.
pub const CAP_OVERSHOOT: f64 = 1.049;

/// Whether the campaign may be shown to the client today.
///
/// Requires the campaign to be active, its targeting (if any) to match the
/// client and both caps to be within [`CAP_OVERSHOOT`] of their limit.
pub fn is_eligible(campaign: &Campaign, client: &Client, today: Day) -> bool {
    if !campaign.is_active(today) {
        return false;
    }
    if let Some(targeting) = &campaign.targeting {
        if !targeting.matches(client) {
            return false;
        }
    }

    within_cap(campaign.impressions_count, campaign.impressions_limit)
        && within_cap(campaign.clicks_count, campaign.clicks_limit)
}

fn within_cap(count: u32, limit: u32) -> bool {
    count as f64 <= limit as f64 * CAP_OVERSHOOT
}

#[cfg(test)]
mod test {
    use primitives::{test_util::{DUMMY_CAMPAIGN, DUMMY_CLIENT}, AudienceGender, Targeting};

    use super::*;

    #[test]
    fn respects_the_activation_window() {
        let campaign = Campaign {
            start_date: Day::new(3),
            end_date: Day::new(5),
            ..DUMMY_CAMPAIGN.clone()
        };

        assert!(!is_eligible(&campaign, &DUMMY_CLIENT, Day::new(2)));
        assert!(is_eligible(&campaign, &DUMMY_CLIENT, Day::new(3)));
        assert!(is_eligible(&campaign, &DUMMY_CLIENT, Day::new(5)));
        assert!(!is_eligible(&campaign, &DUMMY_CLIENT, Day::new(6)));
    }

    #[test]
    fn respects_the_targeting() {
        let targeted = |gender| Campaign {
            targeting: Some(Targeting {
                gender: Some(gender),
                ..Default::default()
            }),
            ..DUMMY_CAMPAIGN.clone()
        };

        // DUMMY_CLIENT is MALE
        assert!(is_eligible(
            &targeted(AudienceGender::Male),
            &DUMMY_CLIENT,
            Day::ZERO
        ));
        assert!(is_eligible(
            &targeted(AudienceGender::All),
            &DUMMY_CLIENT,
            Day::ZERO
        ));
        assert!(!is_eligible(
            &targeted(AudienceGender::Female),
            &DUMMY_CLIENT,
            Day::ZERO
        ));
    }

    #[test]
    fn caps_allow_a_small_overshoot() {
        let impressed = |count| Campaign {
            impressions_count: count,
            ..DUMMY_CAMPAIGN.clone()
        };

        // limit of 100 stretches to 104.9
        assert!(is_eligible(&impressed(100), &DUMMY_CLIENT, Day::ZERO));
        assert!(is_eligible(&impressed(104), &DUMMY_CLIENT, Day::ZERO));
        assert!(!is_eligible(&impressed(105), &DUMMY_CLIENT, Day::ZERO));

        let clicked = Campaign {
            clicks_count: 11,
            ..DUMMY_CAMPAIGN.clone()
        };
        // clicks limit of 10 stretches to 10.49
        assert!(!is_eligible(&clicked, &DUMMY_CLIENT, Day::ZERO));

        let zero_limit = Campaign {
            impressions_limit: 0,
            impressions_count: 0,
            ..DUMMY_CAMPAIGN.clone()
        };
        assert!(is_eligible(&zero_limit, &DUMMY_CLIENT, Day::ZERO));
    }
}
