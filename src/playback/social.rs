use std::collections::HashMap;

use crate::settings::SocialScope;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialState {
    pub starred: bool,
    pub star_count: u64,
    pub following: bool,
}

impl SocialState {
    pub fn seeded(star_count: u64) -> Self {
        Self {
            starred: false,
            star_count,
            following: false,
        }
    }

    pub fn toggle_star(&mut self) {
        self.starred = !self.starred;
        self.star_count = if self.starred {
            self.star_count.saturating_add(1)
        } else {
            self.star_count.saturating_sub(1)
        };
    }

    pub fn toggle_follow(&mut self) {
        self.following = !self.following;
    }
}

/// Star/follow state for the page lifetime, either one shared record or one
/// record per video. Records are created lazily from their seed.
#[derive(Debug, Clone, PartialEq)]
pub struct SocialBook {
    scope: SocialScope,
    default_seed: u64,
    global: Option<SocialState>,
    per_entry: HashMap<String, SocialState>,
}

impl SocialBook {
    pub fn new(scope: SocialScope, default_seed: u64) -> Self {
        Self {
            scope,
            default_seed,
            global: None,
            per_entry: HashMap::new(),
        }
    }

    /// Current state for `entry_id`; `seed` is the entry's own star count, if any.
    pub fn state(&self, entry_id: &str, seed: Option<u64>) -> SocialState {
        let stored = match self.scope {
            SocialScope::Global => self.global,
            SocialScope::PerEntry => self.per_entry.get(entry_id).copied(),
        };
        stored.unwrap_or_else(|| SocialState::seeded(self.seed(seed)))
    }

    pub fn update(
        &mut self,
        entry_id: &str,
        seed: Option<u64>,
        change: impl FnOnce(&mut SocialState),
    ) -> SocialState {
        let fallback = SocialState::seeded(self.seed(seed));
        let state = match self.scope {
            SocialScope::Global => self.global.get_or_insert(fallback),
            SocialScope::PerEntry => self
                .per_entry
                .entry(entry_id.to_string())
                .or_insert(fallback),
        };
        change(state);
        *state
    }

    fn seed(&self, seed: Option<u64>) -> u64 {
        match self.scope {
            SocialScope::Global => self.default_seed,
            SocialScope::PerEntry => seed.unwrap_or(self.default_seed),
        }
    }
}

/// Groups digits in threes, e.g. `12400 -> "12,400"`.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
