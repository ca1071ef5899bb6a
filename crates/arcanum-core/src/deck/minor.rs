//! The 56 minor arcana.
//!
//! Four suits of fourteen cards each: ace through ten, then page, knight,
//! queen, and king. Every card inherits the element of its suit.

use crate::card::{Arcana, Card, Suit};

fn minor(
    suit: Suit,
    number: Option<u8>,
    rank: &str,
    keywords: &[&str],
    upright: &str,
    reversed: &str,
    description: &str,
) -> Card {
    let suit_title = match suit {
        Suit::Wands => "Wands",
        Suit::Cups => "Cups",
        Suit::Swords => "Swords",
        Suit::Pentacles => "Pentacles",
    };
    Card {
        id: format!("{}_of_{}", rank.to_lowercase(), suit),
        name: format!("{rank} of {suit_title}"),
        arcana: Arcana::Minor,
        number,
        suit: Some(suit),
        keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
        upright_meaning: upright.to_string(),
        reversed_meaning: reversed.to_string(),
        description: description.to_string(),
        element: suit.element(),
    }
}

fn wands() -> Vec<Card> {
    let s = Suit::Wands;
    vec![
        minor(
            s,
            Some(1),
            "Ace",
            &["inspiration", "opportunity", "potential", "spark"],
            "A spark of inspiration, new opportunity, and creative potential breaking through",
            "A false start, delays, or enthusiasm fizzling before it catches",
            "From a cloud a hand offers a living wand still sprouting leaves, a castle \
             waiting on the far hills.",
        ),
        minor(
            s,
            Some(2),
            "Two",
            &["planning", "decisions", "foresight", "horizons"],
            "Planning, foresight, and the world held like a map in hand",
            "Fear of the unknown, or plans stalled at the doorstep",
            "A figure stands on a battlement holding a small globe, one wand in hand \
             and one bolted to the wall, gazing over sea and shore.",
        ),
        minor(
            s,
            Some(3),
            "Three",
            &["expansion", "progress", "enterprise", "momentum"],
            "Expansion, first returns, and ships sent out coming into view",
            "Obstacles to progress, delays abroad, or plans that outran their base",
            "From a clifftop a merchant watches ships cross a golden sea, three wands \
             planted firm around him.",
        ),
        minor(
            s,
            Some(4),
            "Four",
            &["celebration", "homecoming", "harmony", "milestone"],
            "Celebration, homecoming, and a milestone worth marking",
            "A shaky foundation, festivities postponed, or comfort grown restless",
            "Two figures raise bouquets beneath a garland strung between four wands, \
             a walled town warm behind them.",
        ),
        minor(
            s,
            Some(5),
            "Five",
            &["conflict", "competition", "friction", "rivalry"],
            "Competition, friction, and energies clashing for room",
            "Conflict avoided or finally settled, tension released",
            "Five youths swing five wands in a mock melee where no blow quite lands.",
        ),
        minor(
            s,
            Some(6),
            "Six",
            &["victory", "recognition", "acclaim", "good news"],
            "Victory, public recognition, and good news riding ahead",
            "Acclaim delayed, pride before a fall, or success kept private",
            "A laureled rider parades on a white horse through a cheering crowd, a \
             wreath tied to his upright wand.",
        ),
        minor(
            s,
            Some(7),
            "Seven",
            &["defense", "perseverance", "standing ground", "challenge"],
            "Standing your ground, perseverance, and the high ground held",
            "Feeling overwhelmed, defenses worn thin, or ground given up",
            "From a hilltop a lone defender swings his wand against six others thrust \
             up from below.",
        ),
        minor(
            s,
            Some(8),
            "Eight",
            &["speed", "momentum", "swift news", "movement"],
            "Swift movement, momentum, and news arriving all at once",
            "Delays, scattered effort, or arrows loosed in haste",
            "Eight wands fly together across an open sky, leaning toward the ground \
             at the end of their arc.",
        ),
        minor(
            s,
            Some(9),
            "Nine",
            &["resilience", "persistence", "wariness", "last stand"],
            "Resilience, wounds borne, and one more effort held in reserve",
            "Exhaustion, suspicion, or a guard kept up too long",
            "A bandaged sentry leans on his wand before a fence of eight, watching \
             for the next assault.",
        ),
        minor(
            s,
            Some(10),
            "Ten",
            &["burden", "responsibility", "overload", "completion"],
            "A heavy load carried to the end, duty shouldered alone",
            "Burdens released or unfairly kept, a load ready to be set down",
            "Bent nearly double, a figure carries ten bound wands toward a town that \
             is almost in reach.",
        ),
        minor(
            s,
            None,
            "Page",
            &["enthusiasm", "curiosity", "discovery", "messenger"],
            "Enthusiasm, curiosity, and a message that kindles new ventures",
            "Restlessness, half-formed ideas, or passion without a plan",
            "In a desert dotted with small pyramids a richly dressed youth studies \
             the sprouting wand held at arm's length.",
        ),
        minor(
            s,
            None,
            "Knight",
            &["adventure", "impulsiveness", "energy", "daring"],
            "Adventure, bold energy, and a headlong charge toward the new",
            "Impulsiveness, haste, or a flame that burns out mid-course",
            "A knight in armor trimmed with salamanders spurs a rearing horse across \
             the desert, wand couched like a lance.",
        ),
        minor(
            s,
            None,
            "Queen",
            &["confidence", "warmth", "determination", "magnetism"],
            "Confidence, warmth, and determination that draws others in",
            "Jealousy, sharpened demands, or self-assurance shaken",
            "Enthroned between carved lions, the queen holds a wand and a sunflower, \
             a black cat seated at her feet.",
        ),
        minor(
            s,
            None,
            "King",
            &["vision", "leadership", "boldness", "mastery"],
            "Visionary leadership, boldness, and mastery of the creative fire",
            "Arrogance, ruthless ambition, or a vision forced on others",
            "The king leans forward on a throne carved with lions and salamanders, \
             his flowering wand planted like a staff of office.",
        ),
    ]
}

fn cups() -> Vec<Card> {
    let s = Suit::Cups;
    vec![
        minor(
            s,
            Some(1),
            "Ace",
            &["new love", "compassion", "joy", "overflow"],
            "An opening heart, new feeling, and compassion overflowing",
            "Emotions blocked or spilled, a cup offered and not taken",
            "From a cloud a hand holds out a brimming chalice, five streams falling \
             to the lily pond below while a dove descends.",
        ),
        minor(
            s,
            Some(2),
            "Two",
            &["love", "partnership", "connection", "mutual respect"],
            "Partnership, mutual attraction, and feeling returned in kind",
            "Imbalance between partners, a bond strained or broken",
            "Two figures exchange cups beneath a winged lion's head rising from a \
             caduceus.",
        ),
        minor(
            s,
            Some(3),
            "Three",
            &["celebration", "friendship", "community", "shared joy"],
            "Celebration among friends, shared joy, and community",
            "Gossip, a third wheel, or festivity tipping into excess",
            "Three women raise their cups in a dance amid vines and gathered fruit.",
        ),
        minor(
            s,
            Some(4),
            "Four",
            &["apathy", "contemplation", "reevaluation", "withdrawal"],
            "Contemplation, apathy toward what is offered, and a pause to look within",
            "Renewed interest, an offer finally noticed, motion after stillness",
            "Beneath a tree a seated figure ignores three cups before him and the \
             fourth held out from a small cloud.",
        ),
        minor(
            s,
            Some(5),
            "Five",
            &["loss", "grief", "regret", "what remains"],
            "Loss, grief, and eyes fixed on what was spilled",
            "Acceptance, turning toward what remains, first steps past regret",
            "A cloaked mourner stands over three spilled cups, two more still upright \
             behind him, a bridge crossing to a far tower.",
        ),
        minor(
            s,
            Some(6),
            "Six",
            &["nostalgia", "memories", "innocence", "kindness"],
            "Nostalgia, kind memories, and gifts carried from the past",
            "Living in the past, or childhood patterns outstaying their welcome",
            "In a quiet courtyard a child hands a cup filled with flowers to a \
             younger one, four more cups ranged around them.",
        ),
        minor(
            s,
            Some(7),
            "Seven",
            &["choices", "illusion", "fantasy", "wishful thinking"],
            "Many choices, daydreams, and options not yet weighed",
            "Clarity after confusion, a choice finally made real",
            "A silhouetted figure faces seven cups floating in cloud, each bearing a \
             stranger prize than the last.",
        ),
        minor(
            s,
            Some(8),
            "Eight",
            &["departure", "walking away", "seeking", "letting go"],
            "Walking away from what no longer fills, and the search for deeper meaning",
            "Fear of leaving, drifting back, or staying one season too long",
            "Under a waning moon a traveler climbs away from eight stacked cups \
             toward the barren hills.",
        ),
        minor(
            s,
            Some(9),
            "Nine",
            &["contentment", "satisfaction", "wishes fulfilled", "comfort"],
            "Contentment, wishes granted, and satisfaction openly enjoyed",
            "Smugness, hollow pleasure, or a wish that did not satisfy",
            "A well-fed host sits with arms crossed before nine cups arranged on a \
             high curved shelf.",
        ),
        minor(
            s,
            Some(10),
            "Ten",
            &["harmony", "family", "lasting happiness", "fulfillment"],
            "Lasting happiness, family harmony, and a promise kept",
            "Discord at home, or an ideal that will not match the day",
            "A couple opens their arms to a rainbow of ten cups while two children \
             dance beside their cottage.",
        ),
        minor(
            s,
            None,
            "Page",
            &["imagination", "sensitivity", "wonder", "openness"],
            "Imagination, sensitivity, and feelings arriving like a surprise",
            "Moodiness, escapism, or creative doubt",
            "By the shifting sea a youth in a flowered tunic regards the small fish \
             peeking from his cup.",
        ),
        minor(
            s,
            None,
            "Knight",
            &["romance", "charm", "invitation", "idealism"],
            "Romance, charm, and an invitation carried with grace",
            "Moody promises, flattery, or an offer that wanders off",
            "A knight in a winged helm rides slowly beside the river, cup borne \
             ahead like a gift.",
        ),
        minor(
            s,
            None,
            "Queen",
            &["empathy", "nurture", "emotional depth", "calm"],
            "Deep empathy, emotional steadiness, and care freely given",
            "Emotional overwhelm, martyrdom, or feelings turned inward",
            "On a throne at the water's edge the queen studies an ornate covered \
             chalice, the only cup in the deck that is closed.",
        ),
        minor(
            s,
            None,
            "King",
            &["composure", "diplomacy", "emotional balance", "counsel"],
            "Composure, diplomacy, and mastery of the heart's weather",
            "Emotional manipulation, coldness, or feeling ruled from below",
            "On a stone throne adrift in a restless sea, the king holds his cup \
             level while ships and dolphins ride the swells.",
        ),
    ]
}

fn swords() -> Vec<Card> {
    let s = Suit::Swords;
    vec![
        minor(
            s,
            Some(1),
            "Ace",
            &["clarity", "breakthrough", "truth", "new idea"],
            "Mental breakthrough, clarity, and truth cutting clean",
            "Confusion, a blunted argument, or clarity turned to a weapon",
            "From a cloud a hand grips an upright sword crowned with a wreath, high \
             above the jagged peaks.",
        ),
        minor(
            s,
            Some(2),
            "Two",
            &["stalemate", "indecision", "avoidance", "truce"],
            "A truce held, indecision, and eyes closed to a hard choice",
            "The stalemate breaks, information arrives, a choice forced open",
            "Blindfolded before the night sea, a seated figure balances two crossed \
             swords across her chest.",
        ),
        minor(
            s,
            Some(3),
            "Three",
            &["heartbreak", "sorrow", "grief", "painful truth"],
            "Heartbreak, sorrow, and a painful truth driven home",
            "Healing begun, forgiveness, or pain kept past its season",
            "Three swords pierce a red heart against a gray sky of falling rain.",
        ),
        minor(
            s,
            Some(4),
            "Four",
            &["rest", "recovery", "retreat", "stillness"],
            "Rest, recovery, and deliberate stillness before the next effort",
            "Restlessness, burnout, or a retreat overstayed",
            "A knight lies in effigy upon a tomb in a quiet chapel, three swords \
             hung above him and one carved at his side.",
        ),
        minor(
            s,
            Some(5),
            "Five",
            &["hollow victory", "discord", "self-interest", "aftermath"],
            "A hollow victory, discord, and winning at too high a price",
            "Old resentments released, amends attempted, the cost of conflict counted",
            "Under a torn sky the victor gathers fallen swords while two figures \
             walk away toward the water.",
        ),
        minor(
            s,
            Some(6),
            "Six",
            &["transition", "moving on", "passage", "calmer waters"],
            "Passage to calmer waters, transition, and troubles left astern",
            "Unfinished business, a crossing delayed, or baggage brought aboard",
            "A ferryman poles a woman and child across gray water, six swords \
             standing upright in the bow.",
        ),
        minor(
            s,
            Some(7),
            "Seven",
            &["deception", "strategy", "stealth", "cunning"],
            "Strategy, stealth, and getting away with what can be carried",
            "A scheme exposed, conscience returning, or self-deception",
            "A thief tiptoes from a camp of bright tents carrying five swords, \
             glancing back at the two left planted.",
        ),
        minor(
            s,
            Some(8),
            "Eight",
            &["restriction", "self-imposed limits", "feeling trapped", "doubt"],
            "Feeling bound, restriction, and limits mostly self-imposed",
            "Release from restriction, eyes uncovered, a first step free",
            "Bound and blindfolded, a figure stands among eight swords on a wet \
             shore, the castle far behind.",
        ),
        minor(
            s,
            Some(9),
            "Nine",
            &["anxiety", "sleepless nights", "worry", "dread"],
            "Anxiety, sleepless worry, and fears grown large in the dark",
            "Daylight on the worst fear, worry loosening its grip",
            "A figure sits up in bed with face in hands, nine swords ranged across \
             the black wall above.",
        ),
        minor(
            s,
            Some(10),
            "Ten",
            &["painful ending", "betrayal", "rock bottom", "finality"],
            "A painful ending, betrayal, and the lowest point reached",
            "A slow recovery begins, for the worst has already passed",
            "Ten swords pin a fallen figure to the shore while dawn breaks yellow \
             over the distant mountains.",
        ),
        minor(
            s,
            None,
            "Page",
            &["vigilance", "new ideas", "watchfulness", "quick wits"],
            "Curiosity, vigilance, and ideas tried out in quick words",
            "Gossip, hasty speech, or plans that stay all talk",
            "On a windswept rise a youth holds his sword two-handed, ready to turn \
             in any direction.",
        ),
        minor(
            s,
            None,
            "Knight",
            &["ambition", "candor", "urgency", "focus"],
            "A headlong charge of ideas, candor, and urgency in argument",
            "Recklessness with words, or a charge begun without a plan",
            "A knight gallops flat out into the wind, sword thrust ahead of his \
             horse's ears.",
        ),
        minor(
            s,
            None,
            "Queen",
            &["perception", "honesty", "independence", "wit"],
            "Clear perception, honest speech, and boundaries finely drawn",
            "Coldness, bitterness, or a verdict reached too soon",
            "The queen sits high in profile, sword upright and left hand extended, \
             clouds gathering below her throne.",
        ),
        minor(
            s,
            None,
            "King",
            &["intellect", "judgment", "discipline", "rigor"],
            "Intellectual command, stern judgment, and rule by reason",
            "Cold verdicts, misuse of authority, or reason turned cruel",
            "The king faces forward on a stone throne, sword tilted in his right \
             hand, butterflies carved in the stone behind him.",
        ),
    ]
}

fn pentacles() -> Vec<Card> {
    let s = Suit::Pentacles;
    vec![
        minor(
            s,
            Some(1),
            "Ace",
            &["opportunity", "prosperity", "new venture", "groundwork"],
            "A tangible opportunity, seed money, and prosperity taking root",
            "A missed chance, shaky planning, or gain slipping the grasp",
            "From a cloud a hand presents a golden pentacle above a garden path \
             arched with roses.",
        ),
        minor(
            s,
            Some(2),
            "Two",
            &["juggling", "adaptability", "priorities", "flux"],
            "Juggling priorities, adaptability, and balance kept in motion",
            "Overcommitment, dropped balls, or books that will not balance",
            "A dancer juggles two pentacles bound in a loop of green ribbon while \
             tall ships climb the waves behind him.",
        ),
        minor(
            s,
            Some(3),
            "Three",
            &["teamwork", "craftsmanship", "collaboration", "recognition"],
            "Teamwork, craftsmanship, and skill recognized by others",
            "Poor collaboration, cut corners, or credit withheld",
            "In a cathedral archway a mason pauses on his bench while a monk and an \
             architect consult the plans.",
        ),
        minor(
            s,
            Some(4),
            "Four",
            &["security", "saving", "possession", "holding on"],
            "Security held tight, savings, and control of what one owns",
            "Greed, hoarding, or a grip loosened at last",
            "A crowned figure clutches one pentacle to his chest, balances one on \
             his head, and pins one beneath each foot.",
        ),
        minor(
            s,
            Some(5),
            "Five",
            &["hardship", "scarcity", "exclusion", "cold season"],
            "Hardship, scarcity, and a cold walk past lighted windows",
            "Recovery from loss, help accepted, the worst of winter passing",
            "Two ragged figures struggle through snow beneath a stained glass window \
             of five bright pentacles.",
        ),
        minor(
            s,
            Some(6),
            "Six",
            &["generosity", "charity", "give and take", "patronage"],
            "Generosity, help given and received, and scales held fair",
            "Strings attached, lingering debt, or charity that serves the giver",
            "A merchant weighs coins in a scale while giving alms to two kneeling \
             beggars.",
        ),
        minor(
            s,
            Some(7),
            "Seven",
            &["assessment", "cultivation", "long-term view", "yield"],
            "Patient cultivation, assessment, and a crop worth the wait",
            "Impatience with slow returns, or effort sunk in the wrong field",
            "A farmer leans on his hoe, studying the seven pentacles ripening on \
             the vine.",
        ),
        minor(
            s,
            Some(8),
            "Eight",
            &["diligence", "apprenticeship", "detail", "repetition"],
            "Diligent practice, apprenticeship, and skill built coin by coin",
            "Tedium, perfectionism, or workmanship gone careless",
            "At his bench a craftsman chisels the eighth pentacle, six hung in a \
             row and one resting at his feet.",
        ),
        minor(
            s,
            Some(9),
            "Nine",
            &["self-sufficiency", "refinement", "earned luxury", "poise"],
            "Self-sufficiency, refinement, and luxury earned by discipline",
            "Overreliance on comfort, or worth measured only in possessions",
            "A gloved falconer stands at ease in her vineyard, nine pentacles \
             ripening among the vines.",
        ),
        minor(
            s,
            Some(10),
            "Ten",
            &["legacy", "wealth", "family foundation", "inheritance"],
            "Legacy, lasting wealth, and a family's long foundation",
            "Inheritance disputed, instability at the root, or fleeting riches",
            "An old man in a rich robe sits with his dogs by the gate while his \
             family pass beneath the arch, ten pentacles arrayed across the scene.",
        ),
        minor(
            s,
            None,
            "Page",
            &["study", "practicality", "new skill", "groundedness"],
            "A student's focus, practical ambition, and a skill worth learning",
            "Procrastination, lessons ignored, or plans without footing",
            "In a green field a youth holds a single pentacle at eye level as if \
             reading it.",
        ),
        minor(
            s,
            None,
            "Knight",
            &["reliability", "routine", "thoroughness", "steadiness"],
            "Reliability, methodical effort, and progress at a plow horse's pace",
            "Stagnation, boredom, or thoroughness hardened into a rut",
            "A knight sits motionless on a heavy black horse, pentacle held out \
             before him like a surveyor's mark.",
        ),
        minor(
            s,
            None,
            "Queen",
            &["prudence", "stewardship", "hearth", "plenty"],
            "Practical care, stewardship, and plenty shared from a warm hearth",
            "Overwork at home, self-neglect, or worry over providing",
            "Among roses and rich ground the queen cradles a pentacle in her lap, \
             a hare slipping past the corner of her throne.",
        ),
        minor(
            s,
            None,
            "King",
            &["accomplishment", "enterprise", "worldly success", "providence"],
            "Worldly accomplishment, sound enterprise, and wealth well managed",
            "Stubborn materialism, bribery, or an empire stretched too far",
            "Robed in grapevines, the king rests one hand on a pentacle and one on \
             his scepter, his castle rising behind the bull-carved throne.",
        ),
    ]
}

/// Build the 56 minor arcana, suit by suit in wands, cups, swords,
/// pentacles order.
pub fn minor_arcana() -> Vec<Card> {
    let mut cards = wands();
    cards.extend(cups());
    cards.extend(swords());
    cards.extend(pentacles());
    cards
}
