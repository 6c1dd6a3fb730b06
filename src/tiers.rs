/// One named output tier: the first `cutoff` domains of the ranked list
/// land in `<name>.csv`.
#[derive(Debug, Clone, Copy)]
pub struct Tier {
    pub name: &'static str,
    pub cutoff: usize,
}

impl Tier {
    pub fn filename(&self) -> String {
        format!("{}.csv", self.name)
    }
}

/// The fixed set of output tiers. Not configurable.
pub const TIERS: [Tier; 6] = [
    Tier {
        name: "top10",
        cutoff: 10,
    },
    Tier {
        name: "top100",
        cutoff: 100,
    },
    Tier {
        name: "top1k",
        cutoff: 1_000,
    },
    Tier {
        name: "top10k",
        cutoff: 10_000,
    },
    Tier {
        name: "top100k",
        cutoff: 100_000,
    },
    Tier {
        name: "top1m",
        cutoff: 1_000_000,
    },
];
