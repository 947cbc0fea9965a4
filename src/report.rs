use serde::{Deserialize, Serialize};

use crate::compatibility::{
    compatibility_label, CompatibilityLabel, CompatibilityModel, CompatibilityResult, ScoreBucket,
};
use crate::numerology::{life_path_title, life_path_traits};
use crate::CosmicProfile;

// ---------------------------
// ## Report Types
// ---------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationshipMode {
    Romance,
    Friendship,
    Work,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Dimension {
    LifePath,
    Western,
    Chinese,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportData {
    pub mode: RelationshipMode,
    pub overall: u8,
    pub label: CompatibilityLabel,
    pub summary: String,
    pub life_path_text: String,
    pub western_text: String,
    pub chinese_text: String,
    pub advice: String,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
}

// ---------------------------
// ## Template Table
// ---------------------------

// One template per (dimension, mode, bucket). Placeholders are filled from
// the two profiles and the static description tables.
fn template(dimension: Dimension, mode: RelationshipMode, bucket: ScoreBucket) -> &'static str {
    use Dimension::*;
    use RelationshipMode::*;
    use ScoreBucket::*;
    match (dimension, mode, bucket) {
        (LifePath, Romance, Soulmate) => "{name_a}'s path as {title_a} and {name_b}'s as {title_b} run side by side. Numerologically this is the rare pairing where two journeys become one.",
        (LifePath, Romance, Excellent) => "As {title_a} and {title_b}, {name_a} and {name_b} move at a compatible rhythm, each {trait_a} where the other needs it most.",
        (LifePath, Romance, Promising) => "Life paths {life_path_a} and {life_path_b} travel different roads, but the roads cross often enough for {name_a} and {name_b} to build something real.",
        (LifePath, Romance, Challenging) => "Life paths {life_path_a} and {life_path_b} pull in different directions. {name_a} and {name_b} will need to respect detours the other insists on taking.",
        (LifePath, Friendship, Soulmate) => "{name_a} and {name_b} are the friends who finish each other's plans. {title_a} and {title_b} make a formidable pair.",
        (LifePath, Friendship, Excellent) => "A {trait_a} friend and a {trait_b} one cover a lot of ground together. {name_a} and {name_b} balance naturally.",
        (LifePath, Friendship, Promising) => "{name_a} and {name_b} approach life differently, and that difference is exactly what each friendship lesson needs.",
        (LifePath, Friendship, Challenging) => "Numbers {life_path_a} and {life_path_b} rarely want the same weekend. This friendship grows slowly or not at all.",
        (LifePath, Work, Soulmate) => "In work, {title_a} plus {title_b} reads like a founding team. {name_a} and {name_b} multiply each other's output.",
        (LifePath, Work, Excellent) => "{name_a} brings a {trait_a} approach and {name_b} a {trait_b} one. Projects between them tend to ship.",
        (LifePath, Work, Promising) => "Paths {life_path_a} and {life_path_b} make workable colleagues when the division of labor is explicit.",
        (LifePath, Work, Challenging) => "Paths {life_path_a} and {life_path_b} disagree about process before they disagree about goals. Keep the roles written down.",
        (Western, Romance, Soulmate) => "{sign_a} and {sign_b} are one of the zodiac's storybook pairings. The {element_a} in {name_a} meets its match in {name_b}.",
        (Western, Romance, Excellent) => "{sign_a} warms quickly to {sign_b}. {element_a} and {element_b} keep the spark fed without smothering it.",
        (Western, Romance, Promising) => "{sign_a} and {sign_b} flirt across an elemental gap. Curiosity carries {name_a} and {name_b} further than comfort would.",
        (Western, Romance, Challenging) => "{sign_a} and {sign_b} speak different emotional dialects. {name_a} and {name_b} must translate for each other daily.",
        (Western, Friendship, Soulmate) => "A {sign_a} and a {sign_b} in the same room raise the temperature. {name_a} and {name_b} are instant co-conspirators.",
        (Western, Friendship, Excellent) => "{sign_a} and {sign_b} share enough {element_a} spirit to laugh at the same disasters.",
        (Western, Friendship, Promising) => "{sign_a} steadies what {sign_b} stirs up. An odd couple, but odd couples last.",
        (Western, Friendship, Challenging) => "{sign_a} and {sign_b} circle each other warily. Shared projects help where small talk fails.",
        (Western, Work, Soulmate) => "{sign_a} vision and {sign_b} follow-through make {name_a} and {name_b} the pairing managers hope for.",
        (Western, Work, Excellent) => "{element_a} drive and {element_b} judgment split the work cleanly between {name_a} and {name_b}.",
        (Western, Work, Promising) => "{sign_a} and {sign_b} want different meeting lengths. The output is good when the calendar survives.",
        (Western, Work, Challenging) => "{sign_a} and {sign_b} grade each other's work by different rubrics. Agree on the definition of done first.",
        (Chinese, Romance, Soulmate) => "In the Chinese cycle the {animal_a} and the {animal_b} are destined allies. {name_a} and {name_b} protect each other by instinct.",
        (Chinese, Romance, Excellent) => "The {animal_a} and the {animal_b} share a {chinese_element_a} ease. Together the years feel shorter.",
        (Chinese, Romance, Promising) => "The {animal_a} and the {animal_b} are not natural companions, which makes every earned truce between {name_a} and {name_b} count double.",
        (Chinese, Romance, Challenging) => "The {animal_a} and the {animal_b} sit opposite in the cycle. {name_a} and {name_b} love best with a little distance built in.",
        (Chinese, Friendship, Soulmate) => "The {animal_a} and the {animal_b} belong to the same trine. {name_a} and {name_b} never need to explain themselves twice.",
        (Chinese, Friendship, Excellent) => "A {animal_a} keeps a {animal_b}'s secrets. Easy loyalty between {name_a} and {name_b}.",
        (Chinese, Friendship, Promising) => "The {animal_a} and the {animal_b} meet in the middle when food is involved. Keep the rituals.",
        (Chinese, Friendship, Challenging) => "The {animal_a} and the {animal_b} clash by reflex. Short visits, long memories.",
        (Chinese, Work, Soulmate) => "The {animal_a} scouts and the {animal_b} secures. {name_a} and {name_b} divide risk the way the cycle intended.",
        (Chinese, Work, Excellent) => "{animal_a} initiative with {animal_b} patience gives {name_a} and {name_b} a complete toolkit.",
        (Chinese, Work, Promising) => "The {animal_a} and the {animal_b} negotiate more than they collaborate, and the deals hold.",
        (Chinese, Work, Challenging) => "The {animal_a} and the {animal_b} compete before they cooperate. Separate lanes, shared scoreboard.",
    }
}

fn advice_template(mode: RelationshipMode, bucket: ScoreBucket) -> &'static str {
    use RelationshipMode::*;
    use ScoreBucket::*;
    match (mode, bucket) {
        (Romance, Soulmate) => "Protect what comes easily. {name_a} and {name_b} should name the small rituals that make this work and never skip them.",
        (Romance, Excellent) => "Lean into the strengths and schedule the hard conversations early, while goodwill is high.",
        (Romance, Promising) => "Move slowly and let curiosity do the work. The gaps between {name_a} and {name_b} close with time, not pressure.",
        (Romance, Challenging) => "Go in with open eyes. {name_a} and {name_b} can make this work, but only by treating every difference as information, not insult.",
        (Friendship, Soulmate) => "Friendships this easy still need tending. Show up for the unglamorous moments.",
        (Friendship, Excellent) => "Keep the standing plans standing. Momentum is this friendship's best friend.",
        (Friendship, Promising) => "Find the one shared activity that works and repeat it until it becomes yours.",
        (Friendship, Challenging) => "Keep expectations light and let the friendship define its own size.",
        (Work, Soulmate) => "Put this pairing on the hardest problem available. It is being wasted on anything routine.",
        (Work, Excellent) => "Agree on who owns what, then stay out of each other's lane and watch it compound.",
        (Work, Promising) => "Write the working agreement down. Structure turns this pairing from adequate to good.",
        (Work, Challenging) => "Keep the collaboration scoped and the feedback loops short. Small wins first.",
    }
}

// ---------------------------
// ## Placeholder Filling
// ---------------------------

fn fill(template: &str, a: &CosmicProfile, b: &CosmicProfile) -> String {
    let substitutions: [(&str, String); 16] = [
        ("{name_a}", a.name.clone()),
        ("{name_b}", b.name.clone()),
        ("{sign_a}", a.western.sign.to_string()),
        ("{sign_b}", b.western.sign.to_string()),
        ("{element_a}", a.western.element.to_string()),
        ("{element_b}", b.western.element.to_string()),
        ("{animal_a}", a.chinese.animal.to_string()),
        ("{animal_b}", b.chinese.animal.to_string()),
        ("{chinese_element_a}", a.chinese.element.to_string()),
        ("{chinese_element_b}", b.chinese.element.to_string()),
        ("{life_path_a}", a.numerology.life_path.to_string()),
        ("{life_path_b}", b.numerology.life_path.to_string()),
        ("{title_a}", life_path_title(a.numerology.life_path).to_string()),
        ("{title_b}", life_path_title(b.numerology.life_path).to_string()),
        ("{trait_a}", life_path_traits(a.numerology.life_path)[0].to_string()),
        ("{trait_b}", life_path_traits(b.numerology.life_path)[0].to_string()),
    ];
    let mut text = template.to_string();
    for (key, value) in substitutions {
        text = text.replace(key, &value);
    }
    text
}

fn summary_text(bucket: ScoreBucket, a: &CosmicProfile, b: &CosmicProfile) -> String {
    let template = match bucket {
        ScoreBucket::Soulmate => "{name_a} and {name_b} read like a match written in advance.",
        ScoreBucket::Excellent => "{name_a} and {name_b} have the makings of something strong.",
        ScoreBucket::Promising => "{name_a} and {name_b} have real common ground worth exploring.",
        ScoreBucket::Challenging => "{name_a} and {name_b} would be choosing the scenic route.",
    };
    fill(template, a, b)
}

// ---------------------------
// ## Strengths and Challenges
// ---------------------------

fn collect_strengths(
    a: &CosmicProfile,
    b: &CosmicProfile,
    result: &CompatibilityResult,
) -> Vec<String> {
    let mut strengths = Vec::new();

    if a.western.element == b.western.element {
        strengths.push(fill(
            "Both share the {element_a} element, so their first instincts usually agree.",
            a,
            b,
        ));
    } else if a.western.element.complements(b.western.element) {
        strengths.push(fill(
            "{element_a} and {element_b} feed each other rather than compete.",
            a, b,
        ));
    }

    if a.western.sign == b.western.sign
        || a.western.sign.compatible_signs().contains(&b.western.sign)
        || b.western.sign.compatible_signs().contains(&a.western.sign)
    {
        strengths.push(fill(
            "{sign_a} and {sign_b} are a traditionally favored pairing.",
            a, b,
        ));
    }

    if a.chinese.animal == b.chinese.animal
        || a.chinese.animal.compatible_animals().contains(&b.chinese.animal)
        || b.chinese.animal.compatible_animals().contains(&a.chinese.animal)
    {
        strengths.push(fill(
            "The {animal_a} and the {animal_b} are allies in the Chinese cycle.",
            a, b,
        ));
    }

    if a.numerology.life_path == b.numerology.life_path {
        strengths.push(fill(
            "Twin life paths mean {name_a} and {name_b} are walking the same lesson.",
            a, b,
        ));
    } else if result.life_path >= 85 {
        strengths.push(fill(
            "Life paths {life_path_a} and {life_path_b} pull in the same direction.",
            a, b,
        ));
    }

    let masters = [11, 22, 33];
    if masters.contains(&a.numerology.life_path) && masters.contains(&b.numerology.life_path) {
        strengths.push(fill(
            "Two master numbers under one roof is rare air.",
            a, b,
        ));
    }

    // floor guarantee: at least two entries, padded with generic statements
    let generics = [
        "Every strong pairing is built, and these two have the raw material.",
        "Shared effort counts for more here than any chart placement.",
    ];
    let mut generic_iter = generics.iter();
    while strengths.len() < 2 {
        if let Some(generic) = generic_iter.next() {
            strengths.push((*generic).to_string());
        } else {
            break;
        }
    }

    strengths
}

fn collect_challenges(
    a: &CosmicProfile,
    b: &CosmicProfile,
    result: &CompatibilityResult,
) -> Vec<String> {
    let mut challenges = Vec::new();

    if a.chinese.animal.incompatible_animals().contains(&b.chinese.animal)
        || b.chinese.animal.incompatible_animals().contains(&a.chinese.animal)
    {
        challenges.push(fill(
            "The {animal_a} and the {animal_b} clash in the Chinese cycle and will feel it under stress.",
            a, b,
        ));
    }

    if result.western <= 55 {
        challenges.push(fill(
            "{element_a} and {element_b} temperaments read each other wrong by default.",
            a, b,
        ));
    }

    if result.life_path <= 62 {
        challenges.push(fill(
            "Life paths {life_path_a} and {life_path_b} value different kinds of progress.",
            a, b,
        ));
    }

    // floor guarantee: at least one entry
    if challenges.is_empty() {
        challenges.push(
            "No pairing is frictionless; the usual work of listening still applies.".to_string(),
        );
    }

    challenges
}

// ---------------------------
// ## Report Assembly
// ---------------------------

impl CompatibilityModel {
    pub fn generate_report(&self, a: &CosmicProfile, b: &CosmicProfile) -> ReportData {
        self.generate_report_for_mode(a, b, RelationshipMode::Romance)
    }

    pub fn generate_report_for_mode(
        &self,
        a: &CosmicProfile,
        b: &CosmicProfile,
        mode: RelationshipMode,
    ) -> ReportData {
        let result = self.score(a, b);
        let overall_bucket = ScoreBucket::from_score(result.overall);

        let life_path_text = fill(
            template(
                Dimension::LifePath,
                mode,
                ScoreBucket::from_score(result.life_path),
            ),
            a,
            b,
        );
        let western_text = fill(
            template(
                Dimension::Western,
                mode,
                ScoreBucket::from_score(result.western),
            ),
            a,
            b,
        );
        let chinese_text = fill(
            template(
                Dimension::Chinese,
                mode,
                ScoreBucket::from_score(result.chinese),
            ),
            a,
            b,
        );

        ReportData {
            mode,
            overall: result.overall,
            label: compatibility_label(result.overall),
            summary: summary_text(overall_bucket, a, b),
            life_path_text,
            western_text,
            chinese_text,
            advice: fill(advice_template(mode, overall_bucket), a, b),
            strengths: collect_strengths(a, b, &result),
            challenges: collect_challenges(a, b, &result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BirthRecord;

    fn profile(name: &str, year: i32, month: u32, day: u32) -> CosmicProfile {
        let birth = BirthRecord::new(year, month, day).unwrap();
        CosmicProfile::new(name, &birth, 2026)
    }

    fn assert_no_unfilled_placeholders(report: &ReportData) {
        let texts = [
            &report.summary,
            &report.life_path_text,
            &report.western_text,
            &report.chinese_text,
            &report.advice,
        ];
        for text in texts {
            assert!(!text.contains('{'), "unfilled placeholder in: {}", text);
        }
        for line in report.strengths.iter().chain(report.challenges.iter()) {
            assert!(!line.contains('{'), "unfilled placeholder in: {}", line);
        }
    }

    #[test]
    fn test_report_fills_all_placeholders() {
        let model = CompatibilityModel::default();
        let a = profile("Asha", 1990, 7, 15);
        let b = profile("Ravi", 1988, 2, 16);

        for mode in [
            RelationshipMode::Romance,
            RelationshipMode::Friendship,
            RelationshipMode::Work,
        ] {
            let report = model.generate_report_for_mode(&a, &b, mode);
            assert_eq!(report.mode, mode);
            assert_no_unfilled_placeholders(&report);
        }
    }

    #[test]
    fn test_report_floor_guarantees() {
        let model = CompatibilityModel::default();
        // a deliberately rough pairing still gets its minimum content
        let a = profile("Asha", 1990, 7, 15); // Cancer, Horse, path 5
        let b = profile("Nils", 1984, 4, 4); // Aries, Rat, path 4
        let report = model.generate_report(&a, &b);

        assert!(report.strengths.len() >= 2, "strengths: {:?}", report.strengths);
        assert!(!report.challenges.is_empty());
    }

    #[test]
    fn test_report_matches_score_bucket() {
        let model = CompatibilityModel::default();
        let a = profile("Asha", 1990, 7, 15);
        let twin = profile("Mirror", 1990, 7, 15);
        let report = model.generate_report(&a, &twin);

        assert_eq!(report.label.label, "Soulmate-level");
        assert!(report.summary.contains("Asha"));
        assert!(report.summary.contains("Mirror"));
        assert_eq!(report.overall, model.score(&a, &twin).overall);
    }

    #[test]
    fn test_report_uses_profile_names_and_attributes() {
        let model = CompatibilityModel::default();
        let a = profile("Asha", 1990, 7, 15);
        let b = profile("Ravi", 1988, 2, 16);
        let report = model.generate_report(&a, &b);

        // the Chinese clash between Horse and Rat is absent here, but the
        // low western score must surface as a challenge
        let result = model.score(&a, &b);
        if result.western <= 55 {
            assert!(report
                .challenges
                .iter()
                .any(|c| c.contains("Water") || c.contains("Air")));
        }
        assert!(report.western_text.contains("Cancer") || report.western_text.contains("Aquarius"));
    }

    #[test]
    fn test_modes_produce_distinct_narratives() {
        let model = CompatibilityModel::default();
        let a = profile("Asha", 1990, 7, 15);
        let b = profile("Ravi", 1988, 2, 16);

        let romance = model.generate_report_for_mode(&a, &b, RelationshipMode::Romance);
        let work = model.generate_report_for_mode(&a, &b, RelationshipMode::Work);

        assert_ne!(romance.life_path_text, work.life_path_text);
        assert_ne!(romance.advice, work.advice);
        // the scores themselves do not depend on the mode
        assert_eq!(romance.overall, work.overall);
    }

    #[test]
    fn test_identical_report_is_deterministic() {
        let model = CompatibilityModel::default();
        let a = profile("Asha", 1990, 7, 15);
        let b = profile("Ravi", 1988, 2, 16);
        assert_eq!(model.generate_report(&a, &b), model.generate_report(&a, &b));
    }
}
