// Built-in word list for SpellingBee, used when no dictionary file is configured.
pub const WORDS: &[&str] = &[
    // planted
    "adept", "ante", "appeal", "apple", "attend", "dale", "data", "date", "dated", "deal",
    "dealt", "delta", "dental", "land", "landed", "lane", "lapel", "late", "latent", "lead",
    "leap", "lean", "laden", "ladle", "lateen", "neat", "paddle", "padded", "pale", "paled",
    "pall", "pallet", "palate", "panda", "panel", "pant", "panted", "papa", "pate", "patent",
    "peal", "peat", "pedal", "pedant", "penal", "pentad", "petal", "plan", "plane", "planed",
    "planet", "plant", "planted", "plate", "plated", "plea", "plead", "pleat", "tale", "talent",
    "tame", "tape", "taped", "tapped", "teal", "tenant", "tent", "dead", "deed",
    "dent", "dented", "lend", "need", "needle", "peel", "pelt", "pend", "tend", "tended",
    "eland",
    // caption
    "action", "anoint", "attic", "cacao", "cannot", "capon", "cation", "coat", "coin", "icon",
    "into", "iota", "nation", "onto", "optic", "option", "pact", "pain", "paint", "panic",
    "patio", "piano", "pint", "pinto", "piton", "point", "potion", "taco", "tact", "tacit",
    "tannic", "tint", "tonic", "topic", "caption", "captain", "coop", "noon", "poop",
    "pooch", "tapioca", "capital", "tiptop",
    // monarch
    "acorn", "anchor", "camo", "charm", "chroma", "coma", "corn", "croon", "harm", "horn",
    "macho", "macron", "manor", "march", "mocha", "moan", "monarch", "norm", "ranch", "roach",
    "roam", "roman", "raccoon", "cannon", "macaroon", "nacho", "orca",
    "ramrod",
    // everyday words
    "about", "after", "again", "air", "also", "animal", "answer", "apart", "around", "asked",
    "away", "back", "ball", "bank", "bear", "beauty", "became", "because", "become", "been",
    "before", "began", "begin", "being", "below", "best", "better", "between", "bird", "black",
    "blue", "boat", "body", "book", "both", "bread", "bring", "brown", "build", "busy",
    "call", "came", "care", "carry", "cause", "center", "change", "check", "child", "city",
    "class", "clean", "clear", "close", "cold", "color", "come", "common", "cook", "cool",
    "could", "country", "course", "cover", "cross", "dark", "deep", "desk", "done", "door",
    "down", "draw", "dream", "drink", "drive", "during", "each", "early", "earth", "east",
    "easy", "eight", "else", "empty", "even", "ever", "every", "face", "fact", "fall",
    "family", "farm", "fast", "father", "feel", "feet", "field", "find", "fine", "fire",
    "first", "fish", "five", "floor", "flower", "fly", "follow", "food", "foot", "force",
    "form", "found", "four", "free", "friend", "from", "front", "full", "game", "garden",
    "gave", "girl", "give", "glass", "gold", "gone", "good", "great", "green", "ground",
    "group", "grow", "half", "hand", "happy", "hard", "have", "head", "hear", "heard",
    "heart", "heat", "heavy", "help", "here", "high", "hold", "home", "hope", "horse",
    "hour", "house", "idea", "inch", "island", "just", "keep", "kind", "king", "knew",
    "know", "large", "last", "laugh", "learn", "leave", "left", "less", "letter", "life",
    "light", "like", "line", "list", "listen", "little", "live", "long", "look", "lost",
    "loud", "love", "made", "main", "make", "many", "mark", "market", "mean", "meet",
    "mile", "mind", "minute", "miss", "money", "month", "moon", "more", "morning", "most",
    "mother", "mountain", "move", "much", "music", "must", "name", "near", "never", "next",
    "night", "north", "note", "nothing", "notice", "number", "ocean", "often", "once", "only",
    "open", "order", "other", "over", "page", "paper", "part", "party", "pass", "people",
    "person", "picture", "piece", "place", "plain", "play", "please", "poor", "power", "press",
    "pretty", "pull", "push", "quick", "quiet", "rain", "read", "ready", "real", "reason",
    "record", "rest", "right", "river", "road", "rock", "room", "round", "rule", "said",
    "same", "sand", "save", "school", "science", "second", "seed", "seen", "sell", "send",
    "sense", "serve", "seven", "shape", "ship", "shore", "short", "should", "show", "side",
    "sign", "simple", "since", "sing", "size", "sleep", "slow", "small", "snow", "soft",
    "some", "song", "soon", "sound", "south", "space", "speak", "special", "spell", "spring",
    "stand", "star", "start", "state", "stay", "step", "still", "stone", "stood", "stop",
    "story", "street", "strong", "study", "such", "summer", "table", "tail", "take", "talk",
    "teach", "tell", "than", "that", "their", "them", "then", "there", "these", "thing",
    "think", "third", "this", "those", "though", "thought", "three", "through", "time", "today",
    "together", "told", "took", "town", "travel", "tree", "true", "turn", "under", "unit",
    "until", "upon", "usual", "very", "voice", "wait", "walk", "wall", "want", "warm",
    "watch", "water", "wave", "week", "weight", "well", "went", "were", "west", "what",
    "wheel", "when", "where", "which", "while", "white", "whole", "wide", "wild", "will",
    "wind", "window", "winter", "wish", "with", "without", "woman", "wonder", "wood", "word",
    "work", "world", "would", "write", "wrong", "year", "yellow", "young", "your",
];
