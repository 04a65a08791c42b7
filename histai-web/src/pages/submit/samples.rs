/// One vetted question shown on the worked-examples step.
pub struct Sample {
    /// Translation key prefix, e.g. `submit.samples.level1`.
    pub key_prefix: &'static str,
    /// Source figure bundled with the question, relative to the site root.
    pub image: &'static str,
}

pub const SAMPLES: [Sample; 3] = [
    Sample {
        key_prefix: "submit.samples.level1",
        image: "resource/questions/level_1_1.png",
    },
    Sample {
        key_prefix: "submit.samples.level2",
        image: "resource/questions/level_2_1.png",
    },
    Sample {
        key_prefix: "submit.samples.level3",
        image: "resource/questions/level_3_1.png",
    },
];
