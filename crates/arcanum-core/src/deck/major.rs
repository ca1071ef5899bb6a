//! The 22 major arcana.
//!
//! Trump cards numbered 0-21, each with its own elemental attribution.
//! Meanings follow the Rider-Waite-Smith tradition.

use crate::card::{Arcana, Card, Element};

fn major(
    number: u8,
    id: &str,
    name: &str,
    element: Element,
    keywords: &[&str],
    upright: &str,
    reversed: &str,
    description: &str,
) -> Card {
    Card {
        id: id.to_string(),
        name: name.to_string(),
        arcana: Arcana::Major,
        number: Some(number),
        suit: None,
        keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
        upright_meaning: upright.to_string(),
        reversed_meaning: reversed.to_string(),
        description: description.to_string(),
        element,
    }
}

/// Build the 22 major arcana in trump order.
pub fn major_arcana() -> Vec<Card> {
    vec![
        major(
            0,
            "the_fool",
            "The Fool",
            Element::Air,
            &["beginnings", "innocence", "spontaneity", "free spirit"],
            "New beginnings, a leap of faith, and trust in the journey ahead",
            "Recklessness, hesitation, or a risk taken without looking",
            "A young traveler pauses at the edge of a cliff, a small bundle on one \
             shoulder and a white rose in hand, while a little dog leaps at their heels.",
        ),
        major(
            1,
            "the_magician",
            "The Magician",
            Element::Air,
            &["manifestation", "willpower", "skill", "resourcefulness"],
            "Manifestation, focused will, and every tool needed already at hand",
            "Manipulation, scattered energy, or talent left untapped",
            "A figure stands before a table bearing a wand, a cup, a sword, and a \
             pentacle, one hand raised to the heavens and one pointing to the earth.",
        ),
        major(
            2,
            "the_high_priestess",
            "The High Priestess",
            Element::Water,
            &["intuition", "mystery", "inner voice", "stillness"],
            "Intuition, hidden knowledge, and the counsel of the inner voice",
            "Secrets withheld, intuition ignored, or noise drowning out insight",
            "Seated between the black and white pillars of the temple, she holds a \
             scroll half hidden by her cloak, a crescent moon at her feet.",
        ),
        major(
            3,
            "the_empress",
            "The Empress",
            Element::Earth,
            &["abundance", "nurturing", "fertility", "nature"],
            "Abundance, nurturing care, and creative growth in full season",
            "Smothering attention, creative block, or neglect of one's own needs",
            "Crowned with twelve stars, the Empress reclines in a field of ripening \
             wheat, her heart-shaped shield marked with the sign of Venus.",
        ),
        major(
            4,
            "the_emperor",
            "The Emperor",
            Element::Fire,
            &["authority", "structure", "stability", "leadership"],
            "Authority, structure, and the stability of firm foundations",
            "Domination, rigidity, or responsibility set down when it mattered",
            "An armored ruler sits upon a ram-headed stone throne overlooking barren \
             mountains, scepter and orb held steady in his hands.",
        ),
        major(
            5,
            "the_hierophant",
            "The Hierophant",
            Element::Earth,
            &["tradition", "guidance", "belief", "institutions"],
            "Tradition, spiritual guidance, and learning along established paths",
            "Dogma outgrown, convention challenged, or ritual gone hollow",
            "Between two pillars the Hierophant raises a hand in blessing over two \
             kneeling acolytes, the crossed keys of the mysteries at his feet.",
        ),
        major(
            6,
            "the_lovers",
            "The Lovers",
            Element::Air,
            &["love", "harmony", "choice", "alignment"],
            "Love, harmony, and a choice made from the heart's true values",
            "Disharmony, misaligned values, or a choice that cannot be put off",
            "Beneath an angel with outstretched wings, two figures stand in a garden \
             between a fruiting tree and a tree of flames.",
        ),
        major(
            7,
            "the_chariot",
            "The Chariot",
            Element::Water,
            &["determination", "victory", "control", "drive"],
            "Willpower, determination, and victory through self-command",
            "Lost direction, aggression without aim, or a campaign stalled",
            "A crowned charioteer rides a stone chariot drawn by one black and one \
             white sphinx beneath a canopy of stars.",
        ),
        major(
            8,
            "strength",
            "Strength",
            Element::Fire,
            &["courage", "compassion", "patience", "inner strength"],
            "Quiet courage, compassion, and strength mastered from within",
            "Self-doubt, raw emotion running unchecked, or force where patience serves",
            "A garlanded woman gently closes the jaws of a lion, the sign of eternity \
             hovering above her head.",
        ),
        major(
            9,
            "the_hermit",
            "The Hermit",
            Element::Earth,
            &["introspection", "solitude", "wisdom", "seeking"],
            "Introspection, solitude, and the patient search for inner truth",
            "Isolation, withdrawal too long kept, or counsel refused",
            "An old wanderer stands upon a snowy peak, holding high a lantern that \
             shelters a single shining star.",
        ),
        major(
            10,
            "wheel_of_fortune",
            "Wheel of Fortune",
            Element::Fire,
            &["cycles", "fate", "turning point", "fortune"],
            "A turning point, good fortune, and the great cycles set in motion",
            "Resistance to change, a run of bad luck, or a cycle repeating unbroken",
            "A great wheel inscribed with alchemical signs turns in the sky, a sphinx \
             resting above while stranger creatures rise and fall at its rim.",
        ),
        major(
            11,
            "justice",
            "Justice",
            Element::Air,
            &["fairness", "truth", "accountability", "consequence"],
            "Fairness, truth, and consequences weighed with clear eyes",
            "Unfairness, dishonesty, or accountability postponed",
            "Justice sits between stone pillars with sword upright and scales in \
             balance, a square crown upon her head.",
        ),
        major(
            12,
            "the_hanged_man",
            "The Hanged Man",
            Element::Water,
            &["surrender", "new perspective", "pause", "release"],
            "Surrender, willing pause, and wisdom gained by a change of view",
            "Stalling, martyrdom, or sacrifice that buys no insight",
            "A serene figure hangs upside down from a living tree by one ankle, a \
             soft halo of light around his head.",
        ),
        major(
            13,
            "death",
            "Death",
            Element::Water,
            &["endings", "transformation", "transition", "renewal"],
            "An ending that clears the way, transformation, and renewal",
            "Change resisted, stagnation, or an ending drawn out past its time",
            "A skeletal rider in black armor bears a banner with a white rose while \
             king, bishop, and child await the horse's slow advance.",
        ),
        major(
            14,
            "temperance",
            "Temperance",
            Element::Fire,
            &["balance", "moderation", "patience", "synthesis"],
            "Balance, moderation, and opposites blended with patience",
            "Excess, imbalance, or forces that refuse to mix",
            "An angel with one foot on land and one in water pours liquid between two \
             cups, a path behind rising toward distant peaks.",
        ),
        major(
            15,
            "the_devil",
            "The Devil",
            Element::Earth,
            &["bondage", "temptation", "materialism", "shadow"],
            "Attachment, temptation, and chains worn by choice",
            "Breaking free, the shadow confronted, and release from old bondage",
            "A horned figure crouches upon a black pedestal above two chained \
             captives whose fetters hang loose enough to slip.",
        ),
        major(
            16,
            "the_tower",
            "The Tower",
            Element::Fire,
            &["upheaval", "revelation", "collapse", "awakening"],
            "Sudden upheaval, revelation, and false structures struck down",
            "Disaster averted or merely delayed, dread of collapse, lingering ruin",
            "Lightning shatters the crown of a tower built upon rock as two figures \
             fall through the night amid tongues of flame.",
        ),
        major(
            17,
            "the_star",
            "The Star",
            Element::Air,
            &["hope", "renewal", "inspiration", "serenity"],
            "Hope, healing, and quiet faith renewed under open sky",
            "Discouragement, faith worn thin, or inspiration run dry",
            "Beneath one great star and seven lesser lights, a figure kneels at the \
             water's edge, pouring from two pitchers onto land and pool.",
        ),
        major(
            18,
            "the_moon",
            "The Moon",
            Element::Water,
            &["illusion", "dreams", "uncertainty", "the unconscious"],
            "Illusion, dreams, and a path walked by uncertain light",
            "Confusion lifting, fears faced, or self-deception exposed",
            "A dog and a wolf howl at the moon above a winding path, while a crayfish \
             crawls from the pool between two far towers.",
        ),
        major(
            19,
            "the_sun",
            "The Sun",
            Element::Fire,
            &["joy", "vitality", "success", "clarity"],
            "Joy, vitality, and success arriving in plain daylight",
            "Enthusiasm dimmed, success delayed, or cheer put on for show",
            "Under a radiant sun a laughing child rides a white horse past a wall of \
             sunflowers, a red banner streaming behind.",
        ),
        major(
            20,
            "judgement",
            "Judgement",
            Element::Fire,
            &["reckoning", "awakening", "absolution", "calling"],
            "Awakening, honest reckoning, and the call to rise renewed",
            "Self-doubt, a calling left unanswered, or judgment turned harshly inward",
            "An angel sounds a trumpet above opening graves, and the figures below \
             rise with arms lifted toward the sound.",
        ),
        major(
            21,
            "the_world",
            "The World",
            Element::Earth,
            &["completion", "integration", "wholeness", "arrival"],
            "Completion, integration, and the journey brought full circle",
            "Loose ends, a finish just short of the line, or closure withheld",
            "Within a great laurel wreath a dancer moves with a wand in each hand, \
             the four living creatures watching from the corners of the sky.",
        ),
    ]
}
