use crate::models::{MetadataRecord, PlatformScore};

/// A metadata field a rule can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
    OgTitle,
    OgDescription,
    OgImage,
    OgType,
    OgUrl,
    OgSiteName,
    TwitterCard,
    TwitterTitle,
    TwitterDescription,
    TwitterImage,
    TwitterCreator,
    TwitterSite,
    SchemaType,
}

impl Field {
    /// The field's value, or `None` when it is absent or empty.
    pub fn resolve(self, record: &MetadataRecord) -> Option<&str> {
        let og = &record.open_graph;
        let tw = &record.twitter;
        let value = match self {
            Field::Title => Some(record.title.as_str()),
            Field::Description => Some(record.description.as_str()),
            Field::OgTitle => og.title.as_deref(),
            Field::OgDescription => og.description.as_deref(),
            Field::OgImage => og.image.as_deref(),
            Field::OgType => og.og_type.as_deref(),
            Field::OgUrl => og.url.as_deref(),
            Field::OgSiteName => og.site_name.as_deref(),
            Field::TwitterCard => tw.card.as_deref(),
            Field::TwitterTitle => tw.title.as_deref(),
            Field::TwitterDescription => tw.description.as_deref(),
            Field::TwitterImage => tw.image.as_deref(),
            Field::TwitterCreator => tw.creator.as_deref(),
            Field::TwitterSite => tw.site.as_deref(),
            Field::SchemaType => record.schema.schema_type.as_deref(),
        };
        value.filter(|v| !v.is_empty())
    }
}

/// Inclusive length window that earns a bonus.
#[derive(Debug, Clone, Copy)]
pub struct LengthBand {
    pub min: usize,
    pub max: usize,
    pub bonus: u32,
    pub optimal: &'static str,
    pub too_long: &'static str,
    pub too_short: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub enum Check {
    /// Presence alone is a strength.
    Present { strength: &'static str },
    /// Presence earns the base points; the length decides the message.
    Length(LengthBand),
}

/// One line of a platform's scoring table.
///
/// `sources` is a fallback chain: the first non-empty field wins and is the
/// value every later check looks at.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub sources: &'static [Field],
    pub points: u32,
    pub missing: &'static str,
    pub check: Check,
}

impl Rule {
    pub fn resolve<'a>(&self, record: &'a MetadataRecord) -> Option<&'a str> {
        self.sources.iter().find_map(|field| field.resolve(record))
    }

    /// Add this rule's points and exactly one message to `score`.
    pub fn apply(&self, record: &MetadataRecord, score: &mut PlatformScore) {
        let Some(value) = self.resolve(record) else {
            score.issues.push(self.missing.to_string());
            return;
        };

        score.score += self.points;
        match self.check {
            Check::Present { strength } => score.strengths.push(strength.to_string()),
            Check::Length(band) => {
                let len = text_len(value);
                if (band.min..=band.max).contains(&len) {
                    score.score += band.bonus;
                    score.strengths.push(band.optimal.to_string());
                } else if len > band.max {
                    score.issues.push(band.too_long.to_string());
                } else {
                    score.issues.push(band.too_short.to_string());
                }
            }
        }
    }
}

/// Length in UTF-16 code units, the unit browsers and social crawlers count in.
pub fn text_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Run a rule table in order against `record`.
pub fn evaluate(rules: &[Rule], record: &MetadataRecord) -> PlatformScore {
    let mut score = PlatformScore::empty();
    for rule in rules {
        rule.apply(record, &mut score);
    }
    score
}

pub const TWITTER_RULES: &[Rule] = &[
    Rule {
        sources: &[Field::TwitterCard],
        points: 10,
        missing: "Missing twitter:card meta tag",
        check: Check::Present {
            strength: "Twitter card type specified",
        },
    },
    Rule {
        sources: &[Field::TwitterTitle, Field::OgTitle, Field::Title],
        points: 20,
        missing: "Missing title for Twitter card",
        check: Check::Length(LengthBand {
            min: 30,
            max: 70,
            bonus: 10,
            optimal: "Title length is optimal (30-70 chars)",
            too_long: "Title too long (over 70 chars)",
            too_short: "Title too short (under 30 chars)",
        }),
    },
    Rule {
        sources: &[
            Field::TwitterDescription,
            Field::OgDescription,
            Field::Description,
        ],
        points: 20,
        missing: "Missing description for Twitter card",
        check: Check::Length(LengthBand {
            min: 100,
            max: 200,
            bonus: 10,
            optimal: "Description length is optimal (100-200 chars)",
            too_long: "Description too long (over 200 chars)",
            too_short: "Description too short (under 100 chars)",
        }),
    },
    Rule {
        sources: &[Field::TwitterImage, Field::OgImage],
        points: 25,
        missing: "Missing twitter:image or og:image",
        check: Check::Present {
            strength: "Twitter card image present",
        },
    },
    Rule {
        sources: &[Field::TwitterCreator, Field::TwitterSite],
        points: 5,
        missing: "Consider adding twitter:creator or twitter:site",
        check: Check::Present {
            strength: "Twitter creator/site attribution present",
        },
    },
];

pub const FACEBOOK_RULES: &[Rule] = &[
    Rule {
        sources: &[Field::OgTitle],
        points: 20,
        missing: "Missing og:title meta tag",
        check: Check::Length(LengthBand {
            min: 40,
            max: 60,
            bonus: 5,
            optimal: "OG title length is optimal (40-60 chars)",
            too_long: "OG title too long (over 60 chars)",
            too_short: "OG title could be longer (under 40 chars)",
        }),
    },
    Rule {
        sources: &[Field::OgDescription],
        points: 20,
        missing: "Missing og:description meta tag",
        check: Check::Length(LengthBand {
            min: 150,
            max: 300,
            bonus: 5,
            optimal: "OG description length is optimal (150-300 chars)",
            too_long: "OG description too long (over 300 chars)",
            too_short: "OG description could be longer (under 150 chars)",
        }),
    },
    Rule {
        sources: &[Field::OgImage],
        points: 25,
        missing: "Missing og:image meta tag",
        check: Check::Present {
            strength: "OpenGraph image present",
        },
    },
    Rule {
        sources: &[Field::OgType],
        points: 10,
        missing: "Missing og:type meta tag",
        check: Check::Present {
            strength: "OpenGraph type specified",
        },
    },
    Rule {
        sources: &[Field::OgUrl],
        points: 5,
        missing: "Missing og:url meta tag",
        check: Check::Present {
            strength: "OpenGraph URL specified",
        },
    },
    Rule {
        sources: &[Field::OgSiteName],
        points: 5,
        missing: "Missing og:site_name meta tag",
        check: Check::Present {
            strength: "Site name specified",
        },
    },
];

pub const GOOGLE_RULES: &[Rule] = &[
    Rule {
        sources: &[Field::Title],
        points: 30,
        missing: "Missing title tag",
        check: Check::Length(LengthBand {
            min: 30,
            max: 60,
            bonus: 15,
            optimal: "Title length is optimal (30-60 chars)",
            too_long: "Title too long (over 60 chars) - may be truncated",
            too_short: "Title too short (under 30 chars)",
        }),
    },
    Rule {
        sources: &[Field::Description],
        points: 30,
        missing: "Missing meta description",
        check: Check::Length(LengthBand {
            min: 120,
            max: 160,
            bonus: 15,
            optimal: "Meta description length is optimal (120-160 chars)",
            too_long: "Meta description too long (over 160 chars)",
            too_short: "Meta description too short (under 120 chars)",
        }),
    },
    Rule {
        sources: &[Field::SchemaType],
        points: 10,
        missing: "No structured data (Schema.org) found",
        check: Check::Present {
            strength: "Structured data (Schema.org) present",
        },
    },
];
