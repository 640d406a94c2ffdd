//! Seed data: the first sixty species of the national index plus Ditto.

pub struct Species {
    pub id: u32,
    pub name: &'static str,
    pub types: &'static [&'static str],
    /// hp, attack, defense, special-attack, special-defense, speed
    pub stats: [u32; 6],
}

pub const STAT_NAMES: [&str; 6] = [
    "hp",
    "attack",
    "defense",
    "special-attack",
    "special-defense",
    "speed",
];

const fn s(
    id: u32,
    name: &'static str,
    types: &'static [&'static str],
    stats: [u32; 6],
) -> Species {
    Species {
        id,
        name,
        types,
        stats,
    }
}

pub static SPECIES: &[Species] = &[
    s(1, "bulbasaur", &["grass", "poison"], [45, 49, 49, 65, 65, 45]),
    s(2, "ivysaur", &["grass", "poison"], [60, 62, 63, 80, 80, 60]),
    s(3, "venusaur", &["grass", "poison"], [80, 82, 83, 100, 100, 80]),
    s(4, "charmander", &["fire"], [39, 52, 43, 60, 50, 65]),
    s(5, "charmeleon", &["fire"], [58, 64, 58, 80, 65, 80]),
    s(6, "charizard", &["fire", "flying"], [78, 84, 78, 109, 85, 100]),
    s(7, "squirtle", &["water"], [44, 48, 65, 50, 64, 43]),
    s(8, "wartortle", &["water"], [59, 63, 80, 65, 80, 58]),
    s(9, "blastoise", &["water"], [79, 83, 100, 85, 105, 78]),
    s(10, "caterpie", &["bug"], [45, 30, 35, 20, 20, 45]),
    s(11, "metapod", &["bug"], [50, 20, 55, 25, 25, 30]),
    s(12, "butterfree", &["bug", "flying"], [60, 45, 50, 90, 80, 70]),
    s(13, "weedle", &["bug", "poison"], [40, 35, 30, 20, 20, 50]),
    s(14, "kakuna", &["bug", "poison"], [45, 25, 50, 25, 25, 35]),
    s(15, "beedrill", &["bug", "poison"], [65, 90, 40, 45, 80, 75]),
    s(16, "pidgey", &["normal", "flying"], [40, 45, 40, 35, 35, 56]),
    s(17, "pidgeotto", &["normal", "flying"], [63, 60, 55, 50, 50, 71]),
    s(18, "pidgeot", &["normal", "flying"], [83, 80, 75, 70, 70, 101]),
    s(19, "rattata", &["normal"], [30, 56, 35, 25, 35, 72]),
    s(20, "raticate", &["normal"], [55, 81, 60, 50, 70, 97]),
    s(21, "spearow", &["normal", "flying"], [40, 60, 30, 31, 31, 70]),
    s(22, "fearow", &["normal", "flying"], [65, 90, 65, 61, 61, 100]),
    s(23, "ekans", &["poison"], [35, 60, 44, 40, 54, 55]),
    s(24, "arbok", &["poison"], [60, 95, 69, 65, 79, 80]),
    s(25, "pikachu", &["electric"], [35, 55, 40, 50, 50, 90]),
    s(26, "raichu", &["electric"], [60, 90, 55, 90, 80, 110]),
    s(27, "sandshrew", &["ground"], [50, 75, 85, 20, 30, 40]),
    s(28, "sandslash", &["ground"], [75, 100, 110, 45, 55, 65]),
    s(29, "nidoran-f", &["poison"], [55, 47, 52, 40, 40, 41]),
    s(30, "nidorina", &["poison"], [70, 62, 67, 55, 55, 56]),
    s(31, "nidoqueen", &["poison", "ground"], [90, 92, 87, 75, 85, 76]),
    s(32, "nidoran-m", &["poison"], [46, 57, 40, 40, 40, 50]),
    s(33, "nidorino", &["poison"], [61, 72, 57, 55, 55, 65]),
    s(34, "nidoking", &["poison", "ground"], [81, 102, 77, 85, 75, 85]),
    s(35, "clefairy", &["fairy"], [70, 45, 48, 60, 65, 35]),
    s(36, "clefable", &["fairy"], [95, 70, 73, 95, 90, 60]),
    s(37, "vulpix", &["fire"], [38, 41, 40, 50, 65, 65]),
    s(38, "ninetales", &["fire"], [73, 76, 75, 81, 100, 100]),
    s(39, "jigglypuff", &["normal", "fairy"], [115, 45, 20, 45, 25, 20]),
    s(40, "wigglytuff", &["normal", "fairy"], [140, 70, 45, 85, 50, 45]),
    s(41, "zubat", &["poison", "flying"], [40, 45, 35, 30, 40, 55]),
    s(42, "golbat", &["poison", "flying"], [75, 80, 70, 65, 75, 90]),
    s(43, "oddish", &["grass", "poison"], [45, 50, 55, 75, 65, 30]),
    s(44, "gloom", &["grass", "poison"], [60, 65, 70, 85, 75, 40]),
    s(45, "vileplume", &["grass", "poison"], [75, 80, 85, 110, 90, 50]),
    s(46, "paras", &["bug", "grass"], [35, 70, 55, 45, 55, 25]),
    s(47, "parasect", &["bug", "grass"], [60, 95, 80, 60, 80, 30]),
    s(48, "venonat", &["bug", "poison"], [60, 55, 50, 40, 55, 45]),
    s(49, "venomoth", &["bug", "poison"], [70, 65, 60, 90, 75, 90]),
    s(50, "diglett", &["ground"], [10, 55, 25, 35, 45, 95]),
    s(51, "dugtrio", &["ground"], [35, 100, 50, 50, 70, 120]),
    s(52, "meowth", &["normal"], [40, 45, 35, 40, 40, 90]),
    s(53, "persian", &["normal"], [65, 70, 60, 65, 65, 115]),
    s(54, "psyduck", &["water"], [50, 52, 48, 65, 50, 55]),
    s(55, "golduck", &["water"], [80, 82, 78, 95, 80, 85]),
    s(56, "mankey", &["fighting"], [40, 80, 35, 35, 45, 70]),
    s(57, "primeape", &["fighting"], [65, 105, 60, 60, 70, 95]),
    s(58, "growlithe", &["fire"], [55, 70, 45, 70, 50, 60]),
    s(59, "arcanine", &["fire"], [90, 110, 80, 100, 80, 95]),
    s(60, "poliwag", &["water"], [40, 50, 40, 40, 40, 90]),
    s(132, "ditto", &["normal"], [48, 48, 48, 48, 48, 48]),
];
