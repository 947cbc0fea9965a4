use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------
// ## Western Elements
// ---------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WesternElement {
    Fire,
    Earth,
    Air,
    Water,
}

impl WesternElement {
    /// Fire feeds on Air, Earth holds Water. The classic polarity pairing.
    pub fn complements(self, other: WesternElement) -> bool {
        matches!(
            (self, other),
            (WesternElement::Fire, WesternElement::Air)
                | (WesternElement::Air, WesternElement::Fire)
                | (WesternElement::Earth, WesternElement::Water)
                | (WesternElement::Water, WesternElement::Earth)
        )
    }

    pub fn description(self) -> &'static str {
        match self {
            WesternElement::Fire => "passionate, spontaneous and direct",
            WesternElement::Earth => "grounded, patient and dependable",
            WesternElement::Air => "curious, social and idea-driven",
            WesternElement::Water => "intuitive, emotional and deep",
        }
    }
}

impl fmt::Display for WesternElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            WesternElement::Fire => "Fire",
            WesternElement::Earth => "Earth",
            WesternElement::Air => "Air",
            WesternElement::Water => "Water",
        };
        write!(f, "{}", name)
    }
}

// ---------------------------
// ## Western Signs
// ---------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WesternSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl WesternSign {
    /// Date-range lookup with the traditional boundaries. Each sign's end
    /// date is inclusive; the next sign starts the following day. Capricorn
    /// wraps the year end (Dec 22 through Jan 19).
    pub fn from_month_day(month: u32, day: u32) -> WesternSign {
        match month {
            1 => {
                if day <= 19 {
                    WesternSign::Capricorn
                } else {
                    WesternSign::Aquarius
                }
            }
            2 => {
                if day <= 18 {
                    WesternSign::Aquarius
                } else {
                    WesternSign::Pisces
                }
            }
            3 => {
                if day <= 20 {
                    WesternSign::Pisces
                } else {
                    WesternSign::Aries
                }
            }
            4 => {
                if day <= 19 {
                    WesternSign::Aries
                } else {
                    WesternSign::Taurus
                }
            }
            5 => {
                if day <= 20 {
                    WesternSign::Taurus
                } else {
                    WesternSign::Gemini
                }
            }
            6 => {
                if day <= 20 {
                    WesternSign::Gemini
                } else {
                    WesternSign::Cancer
                }
            }
            7 => {
                if day <= 22 {
                    WesternSign::Cancer
                } else {
                    WesternSign::Leo
                }
            }
            8 => {
                if day <= 22 {
                    WesternSign::Leo
                } else {
                    WesternSign::Virgo
                }
            }
            9 => {
                if day <= 22 {
                    WesternSign::Virgo
                } else {
                    WesternSign::Libra
                }
            }
            10 => {
                if day <= 22 {
                    WesternSign::Libra
                } else {
                    WesternSign::Scorpio
                }
            }
            11 => {
                if day <= 21 {
                    WesternSign::Scorpio
                } else {
                    WesternSign::Sagittarius
                }
            }
            _ => {
                if day <= 21 {
                    WesternSign::Sagittarius
                } else {
                    WesternSign::Capricorn
                }
            }
        }
    }

    pub fn from_date(date: NaiveDate) -> WesternSign {
        WesternSign::from_month_day(date.month(), date.day())
    }

    pub fn all() -> impl Iterator<Item = WesternSign> {
        [
            WesternSign::Aries,
            WesternSign::Taurus,
            WesternSign::Gemini,
            WesternSign::Cancer,
            WesternSign::Leo,
            WesternSign::Virgo,
            WesternSign::Libra,
            WesternSign::Scorpio,
            WesternSign::Sagittarius,
            WesternSign::Capricorn,
            WesternSign::Aquarius,
            WesternSign::Pisces,
        ]
        .iter()
        .copied()
    }

    pub fn symbol(self) -> char {
        match self {
            WesternSign::Aries => '♈',
            WesternSign::Taurus => '♉',
            WesternSign::Gemini => '♊',
            WesternSign::Cancer => '♋',
            WesternSign::Leo => '♌',
            WesternSign::Virgo => '♍',
            WesternSign::Libra => '♎',
            WesternSign::Scorpio => '♏',
            WesternSign::Sagittarius => '♐',
            WesternSign::Capricorn => '♑',
            WesternSign::Aquarius => '♒',
            WesternSign::Pisces => '♓',
        }
    }

    pub fn element(self) -> WesternElement {
        match self {
            WesternSign::Aries | WesternSign::Leo | WesternSign::Sagittarius => {
                WesternElement::Fire
            }
            WesternSign::Taurus | WesternSign::Virgo | WesternSign::Capricorn => {
                WesternElement::Earth
            }
            WesternSign::Gemini | WesternSign::Libra | WesternSign::Aquarius => WesternElement::Air,
            WesternSign::Cancer | WesternSign::Scorpio | WesternSign::Pisces => {
                WesternElement::Water
            }
        }
    }

    pub fn compatible_signs(self) -> &'static [WesternSign] {
        match self {
            WesternSign::Aries => &[
                WesternSign::Leo,
                WesternSign::Sagittarius,
                WesternSign::Gemini,
                WesternSign::Aquarius,
            ],
            WesternSign::Taurus => &[
                WesternSign::Virgo,
                WesternSign::Capricorn,
                WesternSign::Cancer,
                WesternSign::Pisces,
            ],
            WesternSign::Gemini => &[
                WesternSign::Libra,
                WesternSign::Aquarius,
                WesternSign::Aries,
                WesternSign::Leo,
            ],
            WesternSign::Cancer => &[
                WesternSign::Scorpio,
                WesternSign::Pisces,
                WesternSign::Taurus,
                WesternSign::Virgo,
            ],
            WesternSign::Leo => &[
                WesternSign::Aries,
                WesternSign::Sagittarius,
                WesternSign::Gemini,
                WesternSign::Libra,
            ],
            WesternSign::Virgo => &[
                WesternSign::Taurus,
                WesternSign::Capricorn,
                WesternSign::Cancer,
                WesternSign::Scorpio,
            ],
            WesternSign::Libra => &[
                WesternSign::Gemini,
                WesternSign::Aquarius,
                WesternSign::Leo,
                WesternSign::Sagittarius,
            ],
            WesternSign::Scorpio => &[
                WesternSign::Cancer,
                WesternSign::Pisces,
                WesternSign::Virgo,
                WesternSign::Capricorn,
            ],
            WesternSign::Sagittarius => &[
                WesternSign::Aries,
                WesternSign::Leo,
                WesternSign::Libra,
                WesternSign::Aquarius,
            ],
            WesternSign::Capricorn => &[
                WesternSign::Taurus,
                WesternSign::Virgo,
                WesternSign::Scorpio,
                WesternSign::Pisces,
            ],
            WesternSign::Aquarius => &[
                WesternSign::Gemini,
                WesternSign::Libra,
                WesternSign::Aries,
                WesternSign::Sagittarius,
            ],
            WesternSign::Pisces => &[
                WesternSign::Cancer,
                WesternSign::Scorpio,
                WesternSign::Taurus,
                WesternSign::Capricorn,
            ],
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            WesternSign::Aries => "Bold and impulsive, Aries charges first and asks later.",
            WesternSign::Taurus => "Steady Taurus savors comfort and never lets go of what matters.",
            WesternSign::Gemini => "Quick-witted Gemini lives on conversation and variety.",
            WesternSign::Cancer => "Cancer feels everything deeply and guards its inner circle.",
            WesternSign::Leo => "Leo radiates warmth and wants the stage to share it from.",
            WesternSign::Virgo => "Virgo perfects the details everyone else overlooks.",
            WesternSign::Libra => "Libra weighs every side in the search for balance and beauty.",
            WesternSign::Scorpio => "Scorpio loves with intensity and keeps its depths hidden.",
            WesternSign::Sagittarius => "Sagittarius aims for the horizon and rarely looks back.",
            WesternSign::Capricorn => "Capricorn climbs patiently toward goals set years ahead.",
            WesternSign::Aquarius => "Aquarius follows its own orbit and dreams for everyone.",
            WesternSign::Pisces => "Pisces drifts between worlds, absorbing every feeling nearby.",
        }
    }
}

impl fmt::Display for WesternSign {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            WesternSign::Aries => "Aries",
            WesternSign::Taurus => "Taurus",
            WesternSign::Gemini => "Gemini",
            WesternSign::Cancer => "Cancer",
            WesternSign::Leo => "Leo",
            WesternSign::Virgo => "Virgo",
            WesternSign::Libra => "Libra",
            WesternSign::Scorpio => "Scorpio",
            WesternSign::Sagittarius => "Sagittarius",
            WesternSign::Capricorn => "Capricorn",
            WesternSign::Aquarius => "Aquarius",
            WesternSign::Pisces => "Pisces",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WesternZodiac {
    pub sign: WesternSign,
    pub symbol: char,
    pub element: WesternElement,
}

impl WesternZodiac {
    pub fn from_date(date: NaiveDate) -> Self {
        let sign = WesternSign::from_date(date);
        WesternZodiac {
            sign,
            symbol: sign.symbol(),
            element: sign.element(),
        }
    }
}

// ---------------------------
// ## Chinese Elements
// ---------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChineseElement {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl ChineseElement {
    /// Two consecutive years share an element, giving a ten-year element
    /// cycle that meshes with the twelve animals into the sexagenary cycle.
    pub fn from_year(year: i32) -> ChineseElement {
        let index = (year - 4).rem_euclid(10) / 2;
        match index {
            0 => ChineseElement::Wood,
            1 => ChineseElement::Fire,
            2 => ChineseElement::Earth,
            3 => ChineseElement::Metal,
            _ => ChineseElement::Water,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ChineseElement::Wood => "growing, generous and principled",
            ChineseElement::Fire => "dynamic, warm and persuasive",
            ChineseElement::Earth => "stable, honest and nurturing",
            ChineseElement::Metal => "determined, precise and self-reliant",
            ChineseElement::Water => "reflective, flexible and perceptive",
        }
    }
}

impl fmt::Display for ChineseElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ChineseElement::Wood => "Wood",
            ChineseElement::Fire => "Fire",
            ChineseElement::Earth => "Earth",
            ChineseElement::Metal => "Metal",
            ChineseElement::Water => "Water",
        };
        write!(f, "{}", name)
    }
}

// ---------------------------
// ## Chinese Animals
// ---------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChineseAnimal {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl ChineseAnimal {
    /// Year-modulo lookup anchored so that 4 CE is a Rat year, the
    /// conventional epoch (1984 and 1996 are Rat years, 1988 is a Dragon).
    pub fn from_year(year: i32) -> ChineseAnimal {
        match (year - 4).rem_euclid(12) {
            0 => ChineseAnimal::Rat,
            1 => ChineseAnimal::Ox,
            2 => ChineseAnimal::Tiger,
            3 => ChineseAnimal::Rabbit,
            4 => ChineseAnimal::Dragon,
            5 => ChineseAnimal::Snake,
            6 => ChineseAnimal::Horse,
            7 => ChineseAnimal::Goat,
            8 => ChineseAnimal::Monkey,
            9 => ChineseAnimal::Rooster,
            10 => ChineseAnimal::Dog,
            _ => ChineseAnimal::Pig,
        }
    }

    pub fn all() -> impl Iterator<Item = ChineseAnimal> {
        [
            ChineseAnimal::Rat,
            ChineseAnimal::Ox,
            ChineseAnimal::Tiger,
            ChineseAnimal::Rabbit,
            ChineseAnimal::Dragon,
            ChineseAnimal::Snake,
            ChineseAnimal::Horse,
            ChineseAnimal::Goat,
            ChineseAnimal::Monkey,
            ChineseAnimal::Rooster,
            ChineseAnimal::Dog,
            ChineseAnimal::Pig,
        ]
        .iter()
        .copied()
    }

    pub fn symbol(self) -> char {
        match self {
            ChineseAnimal::Rat => '鼠',
            ChineseAnimal::Ox => '牛',
            ChineseAnimal::Tiger => '虎',
            ChineseAnimal::Rabbit => '兔',
            ChineseAnimal::Dragon => '龙',
            ChineseAnimal::Snake => '蛇',
            ChineseAnimal::Horse => '马',
            ChineseAnimal::Goat => '羊',
            ChineseAnimal::Monkey => '猴',
            ChineseAnimal::Rooster => '鸡',
            ChineseAnimal::Dog => '狗',
            ChineseAnimal::Pig => '猪',
        }
    }

    /// Trine allies plus the secret friend. These lists are symmetric: if A
    /// lists B, then B lists A.
    pub fn compatible_animals(self) -> &'static [ChineseAnimal] {
        match self {
            ChineseAnimal::Rat => &[ChineseAnimal::Dragon, ChineseAnimal::Monkey, ChineseAnimal::Ox],
            ChineseAnimal::Ox => &[ChineseAnimal::Snake, ChineseAnimal::Rooster, ChineseAnimal::Rat],
            ChineseAnimal::Tiger => &[ChineseAnimal::Horse, ChineseAnimal::Dog, ChineseAnimal::Pig],
            ChineseAnimal::Rabbit => &[ChineseAnimal::Goat, ChineseAnimal::Pig, ChineseAnimal::Dog],
            ChineseAnimal::Dragon => &[ChineseAnimal::Rat, ChineseAnimal::Monkey, ChineseAnimal::Rooster],
            ChineseAnimal::Snake => &[ChineseAnimal::Ox, ChineseAnimal::Rooster, ChineseAnimal::Monkey],
            ChineseAnimal::Horse => &[ChineseAnimal::Tiger, ChineseAnimal::Dog, ChineseAnimal::Goat],
            ChineseAnimal::Goat => &[ChineseAnimal::Rabbit, ChineseAnimal::Pig, ChineseAnimal::Horse],
            ChineseAnimal::Monkey => &[ChineseAnimal::Rat, ChineseAnimal::Dragon, ChineseAnimal::Snake],
            ChineseAnimal::Rooster => &[ChineseAnimal::Ox, ChineseAnimal::Snake, ChineseAnimal::Dragon],
            ChineseAnimal::Dog => &[ChineseAnimal::Tiger, ChineseAnimal::Horse, ChineseAnimal::Rabbit],
            ChineseAnimal::Pig => &[ChineseAnimal::Rabbit, ChineseAnimal::Goat, ChineseAnimal::Tiger],
        }
    }

    /// The clash and harm animals. Symmetric, like the compatible lists.
    pub fn incompatible_animals(self) -> &'static [ChineseAnimal] {
        match self {
            ChineseAnimal::Rat => &[ChineseAnimal::Horse, ChineseAnimal::Goat],
            ChineseAnimal::Ox => &[ChineseAnimal::Goat, ChineseAnimal::Horse],
            ChineseAnimal::Tiger => &[ChineseAnimal::Monkey, ChineseAnimal::Snake],
            ChineseAnimal::Rabbit => &[ChineseAnimal::Rooster, ChineseAnimal::Dragon],
            ChineseAnimal::Dragon => &[ChineseAnimal::Dog, ChineseAnimal::Rabbit],
            ChineseAnimal::Snake => &[ChineseAnimal::Pig, ChineseAnimal::Tiger],
            ChineseAnimal::Horse => &[ChineseAnimal::Rat, ChineseAnimal::Ox],
            ChineseAnimal::Goat => &[ChineseAnimal::Ox, ChineseAnimal::Rat],
            ChineseAnimal::Monkey => &[ChineseAnimal::Tiger, ChineseAnimal::Pig],
            ChineseAnimal::Rooster => &[ChineseAnimal::Rabbit, ChineseAnimal::Dog],
            ChineseAnimal::Dog => &[ChineseAnimal::Dragon, ChineseAnimal::Rooster],
            ChineseAnimal::Pig => &[ChineseAnimal::Snake, ChineseAnimal::Monkey],
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ChineseAnimal::Rat => "Resourceful and quick, the Rat finds a way where none exists.",
            ChineseAnimal::Ox => "The Ox carries every burden without complaint and never quits.",
            ChineseAnimal::Tiger => "The Tiger lives boldly, all courage and sudden passion.",
            ChineseAnimal::Rabbit => "Gentle and tactful, the Rabbit wins hearts without a fight.",
            ChineseAnimal::Dragon => "The Dragon dreams big and drags the world along with it.",
            ChineseAnimal::Snake => "The Snake watches quietly and strikes only when certain.",
            ChineseAnimal::Horse => "The Horse needs open ground and runs on pure enthusiasm.",
            ChineseAnimal::Goat => "The Goat is the gentle artist of the cycle, kind and easygoing.",
            ChineseAnimal::Monkey => "Clever Monkey turns every problem into a game it can win.",
            ChineseAnimal::Rooster => "The Rooster is exact and outspoken, proud of a job done right.",
            ChineseAnimal::Dog => "Loyal to a fault, the Dog stands guard over the people it loves.",
            ChineseAnimal::Pig => "The Pig is honest and warm, sharing everything it has.",
        }
    }
}

impl fmt::Display for ChineseAnimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ChineseAnimal::Rat => "Rat",
            ChineseAnimal::Ox => "Ox",
            ChineseAnimal::Tiger => "Tiger",
            ChineseAnimal::Rabbit => "Rabbit",
            ChineseAnimal::Dragon => "Dragon",
            ChineseAnimal::Snake => "Snake",
            ChineseAnimal::Horse => "Horse",
            ChineseAnimal::Goat => "Goat",
            ChineseAnimal::Monkey => "Monkey",
            ChineseAnimal::Rooster => "Rooster",
            ChineseAnimal::Dog => "Dog",
            ChineseAnimal::Pig => "Pig",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChineseZodiac {
    pub animal: ChineseAnimal,
    pub element: ChineseElement,
    pub symbol: char,
    pub full_name: String,
}

impl ChineseZodiac {
    pub fn from_year(year: i32) -> Self {
        let animal = ChineseAnimal::from_year(year);
        let element = ChineseElement::from_year(year);
        ChineseZodiac {
            animal,
            element,
            symbol: animal.symbol(),
            full_name: format!("{} {}", element, animal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sign_boundaries() {
        // (month, day, sign on that day) for the last day of each sign and
        // the first day of the next, covering all twelve transitions
        let boundaries = [
            (1, 19, WesternSign::Capricorn),
            (1, 20, WesternSign::Aquarius),
            (2, 18, WesternSign::Aquarius),
            (2, 19, WesternSign::Pisces),
            (3, 20, WesternSign::Pisces),
            (3, 21, WesternSign::Aries),
            (4, 19, WesternSign::Aries),
            (4, 20, WesternSign::Taurus),
            (5, 20, WesternSign::Taurus),
            (5, 21, WesternSign::Gemini),
            (6, 20, WesternSign::Gemini),
            (6, 21, WesternSign::Cancer),
            (7, 22, WesternSign::Cancer),
            (7, 23, WesternSign::Leo),
            (8, 22, WesternSign::Leo),
            (8, 23, WesternSign::Virgo),
            (9, 22, WesternSign::Virgo),
            (9, 23, WesternSign::Libra),
            (10, 22, WesternSign::Libra),
            (10, 23, WesternSign::Scorpio),
            (11, 21, WesternSign::Scorpio),
            (11, 22, WesternSign::Sagittarius),
            (12, 21, WesternSign::Sagittarius),
            (12, 22, WesternSign::Capricorn),
        ];
        for (month, day, expected) in boundaries {
            assert_eq!(
                WesternSign::from_month_day(month, day),
                expected,
                "boundary {}-{}",
                month,
                day
            );
        }
    }

    #[test]
    fn test_elements_three_signs_each() {
        for element in [
            WesternElement::Fire,
            WesternElement::Earth,
            WesternElement::Air,
            WesternElement::Water,
        ] {
            let count = WesternSign::all().filter(|s| s.element() == element).count();
            assert_eq!(count, 3);
        }
    }

    #[test]
    fn test_element_complements_symmetric() {
        assert!(WesternElement::Fire.complements(WesternElement::Air));
        assert!(WesternElement::Air.complements(WesternElement::Fire));
        assert!(WesternElement::Earth.complements(WesternElement::Water));
        assert!(!WesternElement::Fire.complements(WesternElement::Fire));
        assert!(!WesternElement::Fire.complements(WesternElement::Water));
    }

    #[test]
    fn test_compatible_sign_lists_symmetric() {
        for sign in WesternSign::all() {
            for other in sign.compatible_signs() {
                assert!(
                    other.compatible_signs().contains(&sign),
                    "{} lists {} but not the reverse",
                    sign,
                    other
                );
            }
        }
    }

    #[test]
    fn test_dragon_year() {
        assert_eq!(ChineseAnimal::from_year(1988), ChineseAnimal::Dragon);
        let zodiac = ChineseZodiac::from_year(1988);
        assert_eq!(zodiac.element, ChineseElement::Earth);
        assert_eq!(zodiac.full_name, "Earth Dragon");
        assert_eq!(zodiac.symbol, '龙');
    }

    #[test]
    fn test_known_animal_years() {
        assert_eq!(ChineseAnimal::from_year(1984), ChineseAnimal::Rat);
        assert_eq!(ChineseAnimal::from_year(1990), ChineseAnimal::Horse);
        assert_eq!(ChineseAnimal::from_year(2000), ChineseAnimal::Dragon);
        assert_eq!(ChineseAnimal::from_year(2023), ChineseAnimal::Rabbit);
        assert_eq!(ChineseElement::from_year(1984), ChineseElement::Wood);
        assert_eq!(ChineseElement::from_year(2000), ChineseElement::Metal);
    }

    #[test]
    fn test_sexagenary_cycle() {
        for year in 1900..=1984 {
            let a = ChineseZodiac::from_year(year);
            let b = ChineseZodiac::from_year(year + 60);
            assert_eq!(a.animal, b.animal, "animal differs for {}", year);
            assert_eq!(a.element, b.element, "element differs for {}", year);
        }
        // the animal alone repeats every 12, the element every 10
        assert_eq!(
            ChineseAnimal::from_year(1955),
            ChineseAnimal::from_year(1967)
        );
        assert_ne!(
            ChineseZodiac::from_year(1955).element,
            ChineseZodiac::from_year(1967).element
        );
    }

    #[test]
    fn test_chinese_lists_symmetric() {
        for animal in ChineseAnimal::all() {
            for friend in animal.compatible_animals() {
                assert!(
                    friend.compatible_animals().contains(&animal),
                    "{} lists {} as compatible but not the reverse",
                    animal,
                    friend
                );
            }
            for foe in animal.incompatible_animals() {
                assert!(
                    foe.incompatible_animals().contains(&animal),
                    "{} lists {} as incompatible but not the reverse",
                    animal,
                    foe
                );
            }
            // no animal appears on both of its own lists
            for friend in animal.compatible_animals() {
                assert!(!animal.incompatible_animals().contains(friend));
            }
        }
    }

    #[test]
    fn test_negative_years_do_not_panic() {
        // rem_euclid keeps the lookup total for any year the calendar allows
        let _ = ChineseZodiac::from_year(-500);
        let _ = ChineseAnimal::from_year(0);
    }
}
