//! Curated emoji table.
//!
//! Hand-picked entries with lowercase, space-separated tags. Entries listed
//! here take precedence over generated ones for the same symbol.

/// A hand-authored catalog entry
#[derive(Debug, Clone, Copy)]
pub struct Curated {
    pub symbol: &'static str,
    pub tags: &'static str,
}

/// Curated entries in display order, most useful for commit messages and
/// status reports first
pub static CURATED: &[Curated] = &[
    // Status
    Curated { symbol: "✅", tags: "check success done pass ok green checkmark white_check_mark" },
    Curated { symbol: "❌", tags: "cross fail error x cancel stop" },
    Curated { symbol: "⚠️", tags: "warning caution alert attention" },
    Curated { symbol: "⏳", tags: "hourglass waiting rate limited time" },
    // Access
    Curated { symbol: "🔒", tags: "lock private secret restricted secure" },
    Curated { symbol: "🔓", tags: "unlock public open" },
    // Colored markers
    Curated { symbol: "🟢", tags: "green circle active online" },
    Curated { symbol: "🔴", tags: "red circle inactive offline" },
    Curated { symbol: "🟡", tags: "yellow circle pending caution" },
    Curated { symbol: "🟠", tags: "orange circle warning" },
    Curated { symbol: "🟣", tags: "purple circle" },
    Curated { symbol: "🔵", tags: "blue circle info" },
    Curated { symbol: "⚪", tags: "white circle" },
    Curated { symbol: "⚫", tags: "black circle" },
    Curated { symbol: "🟩", tags: "green square" },
    Curated { symbol: "🟥", tags: "red square" },
    Curated { symbol: "🟨", tags: "yellow square" },
    Curated { symbol: "🟦", tags: "blue square" },
    // Development workflow
    Curated { symbol: "🚀", tags: "rocket launch fast ship deploy release" },
    Curated { symbol: "🐛", tags: "bug issue defect" },
    Curated { symbol: "🧪", tags: "test experiment lab" },
    Curated { symbol: "✨", tags: "sparkles feature new shiny" },
    Curated { symbol: "♻️", tags: "recycle refactor cleanup" },
    Curated { symbol: "🔧", tags: "wrench fix tool" },
    Curated { symbol: "🛠️", tags: "tools build maintenance" },
    Curated { symbol: "📦", tags: "package release ship artifact" },
    Curated { symbol: "📝", tags: "memo note docs documentation" },
    Curated { symbol: "🚨", tags: "alarm breaking urgent" },
    Curated { symbol: "🔥", tags: "fire hot important breaking change" },
    // Highlights
    Curated { symbol: "⭐", tags: "star favorite highlight" },
    Curated { symbol: "🌟", tags: "star rating" },
    // Trends
    Curated { symbol: "📈", tags: "chart up growth increase trending" },
    Curated { symbol: "📉", tags: "chart down decrease" },
    Curated { symbol: "⬆️", tags: "up increase upgrade" },
    Curated { symbol: "⬇️", tags: "down decrease downgrade" },
    // Flow
    Curated { symbol: "🔀", tags: "merge shuffle" },
    Curated { symbol: "🔄", tags: "refresh sync cycle" },
    Curated { symbol: "🔁", tags: "repeat again retry" },
    Curated { symbol: "🔂", tags: "repeat once" },
    Curated { symbol: "🔃", tags: "cycle reload" },
    // Review & automation
    Curated { symbol: "👀", tags: "eyes review look" },
    Curated { symbol: "🤖", tags: "bot automation robot" },
    Curated { symbol: "🧠", tags: "brain smart ai" },
    Curated { symbol: "🧩", tags: "puzzle piece component" },
    // Organization
    Curated { symbol: "📌", tags: "pin important" },
    Curated { symbol: "📍", tags: "pin location" },
    Curated { symbol: "🏷️", tags: "label tag" },
    Curated { symbol: "🏁", tags: "finish flag done" },
    Curated { symbol: "🎯", tags: "target goal focus" },
    Curated { symbol: "🧵", tags: "thread discussion" },
    Curated { symbol: "🔗", tags: "link url" },
    // Housekeeping
    Curated { symbol: "🗑️", tags: "trash delete remove" },
    Curated { symbol: "🧹", tags: "broom cleanup clean" },
    Curated { symbol: "📥", tags: "inbox import" },
    Curated { symbol: "📤", tags: "outbox export" },
    // Time
    Curated { symbol: "🕒", tags: "clock time waiting" },
    Curated { symbol: "⏱️", tags: "stopwatch timer" },
    // Search
    Curated { symbol: "🔎", tags: "search find" },
    Curated { symbol: "🔍", tags: "search zoom" },
    // Ideas & notes
    Curated { symbol: "💡", tags: "idea lightbulb suggestion" },
    Curated { symbol: "📚", tags: "books knowledge" },
    Curated { symbol: "🚧", tags: "construction wip" },
    Curated { symbol: "🧯", tags: "extinguisher safety" },
    // Smileys & Emotion
    Curated { symbol: "😀", tags: "grinning smile happy" },
    Curated { symbol: "😃", tags: "smiley happy joy" },
    Curated { symbol: "😄", tags: "smile happy joy" },
    Curated { symbol: "😁", tags: "grin happy" },
    Curated { symbol: "😅", tags: "sweat_smile nervous" },
    Curated { symbol: "😂", tags: "joy laugh crying tears" },
    Curated { symbol: "🤣", tags: "rofl laughing rolling" },
    Curated { symbol: "😊", tags: "blush smile happy" },
    Curated { symbol: "😇", tags: "innocent angel halo" },
    Curated { symbol: "🙂", tags: "slight_smile smile" },
    Curated { symbol: "😉", tags: "wink flirt" },
    Curated { symbol: "😌", tags: "relieved calm" },
    Curated { symbol: "😍", tags: "heart_eyes love crush" },
    Curated { symbol: "🥰", tags: "smiling_hearts love adore" },
    Curated { symbol: "😘", tags: "kiss blow_kiss love" },
    Curated { symbol: "😋", tags: "yum delicious tasty" },
    Curated { symbol: "😎", tags: "sunglasses cool" },
    Curated { symbol: "🤓", tags: "nerd geek glasses" },
    Curated { symbol: "🧐", tags: "monocle thinking curious" },
    Curated { symbol: "🤔", tags: "thinking hmm wonder" },
    Curated { symbol: "🤨", tags: "raised_eyebrow skeptic sus" },
    Curated { symbol: "😐", tags: "neutral meh blank" },
    Curated { symbol: "😑", tags: "expressionless blank" },
    Curated { symbol: "😶", tags: "no_mouth silent speechless" },
    Curated { symbol: "😏", tags: "smirk smug" },
    Curated { symbol: "😒", tags: "unamused meh bored" },
    Curated { symbol: "🙄", tags: "eye_roll whatever" },
    Curated { symbol: "😬", tags: "grimace awkward cringe" },
    Curated { symbol: "😮‍💨", tags: "exhale sigh relief" },
    Curated { symbol: "🤥", tags: "lying pinocchio" },
    Curated { symbol: "😔", tags: "pensive sad thoughtful" },
    Curated { symbol: "😪", tags: "sleepy tired" },
    Curated { symbol: "🤤", tags: "drool drooling" },
    Curated { symbol: "😴", tags: "sleeping zzz tired" },
    Curated { symbol: "😷", tags: "mask sick covid" },
    Curated { symbol: "🤒", tags: "thermometer sick fever" },
    Curated { symbol: "🤕", tags: "bandage hurt injured" },
    Curated { symbol: "🤢", tags: "nauseated sick green" },
    Curated { symbol: "🤮", tags: "vomit puke sick" },
    Curated { symbol: "🤧", tags: "sneeze sick achoo" },
    Curated { symbol: "🥵", tags: "hot sweating heat" },
    Curated { symbol: "🥶", tags: "cold freezing frozen" },
    Curated { symbol: "🥴", tags: "woozy drunk dizzy" },
    Curated { symbol: "😵", tags: "dizzy dead knocked_out" },
    Curated { symbol: "🤯", tags: "exploding_head mind_blown shocked" },
    Curated { symbol: "🤠", tags: "cowboy yeehaw" },
    Curated { symbol: "🥳", tags: "party celebration birthday" },
    Curated { symbol: "🥸", tags: "disguise incognito glasses" },
    Curated { symbol: "😕", tags: "confused puzzled" },
    Curated { symbol: "😟", tags: "worried concerned" },
    Curated { symbol: "🙁", tags: "frown sad" },
    Curated { symbol: "😮", tags: "open_mouth surprised wow" },
    Curated { symbol: "😯", tags: "hushed surprised" },
    Curated { symbol: "😲", tags: "astonished shocked wow" },
    Curated { symbol: "😳", tags: "flushed embarrassed shocked" },
    Curated { symbol: "🥺", tags: "pleading puppy_eyes please" },
    Curated { symbol: "😨", tags: "fearful scared afraid" },
    Curated { symbol: "😰", tags: "anxious nervous sweat" },
    Curated { symbol: "😢", tags: "cry sad tear" },
    Curated { symbol: "😭", tags: "sob crying sad tears" },
    Curated { symbol: "😱", tags: "scream scared horror" },
    Curated { symbol: "😤", tags: "triumph proud huffing" },
    Curated { symbol: "😡", tags: "rage angry mad" },
    Curated { symbol: "😠", tags: "angry mad grumpy" },
    Curated { symbol: "🤬", tags: "cursing swearing angry" },
    Curated { symbol: "😈", tags: "smiling_imp devil evil" },
    Curated { symbol: "👿", tags: "imp devil angry" },
    Curated { symbol: "💀", tags: "skull dead death" },
    Curated { symbol: "💩", tags: "poop poo shit" },
    Curated { symbol: "🤡", tags: "clown joker" },
    Curated { symbol: "👻", tags: "ghost boo spooky" },
    Curated { symbol: "👽", tags: "alien ufo extraterrestrial" },
    // Gestures & Body
    Curated { symbol: "👋", tags: "wave hello bye hi" },
    Curated { symbol: "👌", tags: "ok okay perfect" },
    Curated { symbol: "🤌", tags: "pinched_fingers italian chef" },
    Curated { symbol: "✌️", tags: "peace victory v" },
    Curated { symbol: "🤞", tags: "crossed_fingers luck hope" },
    Curated { symbol: "🤘", tags: "rock metal horns" },
    Curated { symbol: "👍", tags: "thumbsup yes good like +1" },
    Curated { symbol: "👎", tags: "thumbsdown no bad dislike -1" },
    Curated { symbol: "👏", tags: "clap applause bravo" },
    Curated { symbol: "🙌", tags: "raised_hands hooray yay" },
    Curated { symbol: "🤝", tags: "handshake deal agreement" },
    Curated { symbol: "🙏", tags: "pray please thanks namaste" },
    Curated { symbol: "💪", tags: "muscle strong flex bicep" },
    // Hearts & Love
    Curated { symbol: "❤️", tags: "heart love red_heart" },
    Curated { symbol: "🧡", tags: "orange_heart heart" },
    Curated { symbol: "💛", tags: "yellow_heart heart" },
    Curated { symbol: "💚", tags: "green_heart heart" },
    Curated { symbol: "💙", tags: "blue_heart heart" },
    Curated { symbol: "💜", tags: "purple_heart heart" },
    Curated { symbol: "🖤", tags: "black_heart heart" },
    Curated { symbol: "💔", tags: "broken_heart heartbreak sad" },
    // Objects & Symbols
    Curated { symbol: "💥", tags: "boom explosion collision" },
    Curated { symbol: "💬", tags: "speech_bubble chat comment" },
    Curated { symbol: "💭", tags: "thought_bubble thinking" },
    Curated { symbol: "💤", tags: "zzz sleep tired" },
    // Tech & Work
    Curated { symbol: "💻", tags: "laptop computer mac" },
    Curated { symbol: "📱", tags: "phone iphone mobile smartphone" },
    Curated { symbol: "📧", tags: "email mail envelope" },
    Curated { symbol: "🔑", tags: "key password" },
    Curated { symbol: "⚙️", tags: "gear settings cog" },
    Curated { symbol: "📁", tags: "folder directory" },
    Curated { symbol: "📄", tags: "document file page" },
    Curated { symbol: "❓", tags: "question what help" },
    Curated { symbol: "❗", tags: "exclamation important alert" },
    Curated { symbol: "🎉", tags: "party tada celebration congrats" },
    Curated { symbol: "🎁", tags: "gift present birthday" },
    Curated { symbol: "🏆", tags: "trophy winner award champion" },
    // Weather & Nature
    Curated { symbol: "☀️", tags: "sun sunny weather" },
    Curated { symbol: "☁️", tags: "cloud cloudy weather" },
    Curated { symbol: "❄️", tags: "snow snowflake cold winter" },
    Curated { symbol: "🌈", tags: "rainbow pride" },
    Curated { symbol: "🌊", tags: "wave ocean water sea" },
    // Food & Drink
    Curated { symbol: "☕", tags: "coffee cafe hot" },
    Curated { symbol: "🍺", tags: "beer drink alcohol" },
    Curated { symbol: "🍕", tags: "pizza food" },
    Curated { symbol: "🍔", tags: "burger hamburger food" },
    Curated { symbol: "🌮", tags: "taco food mexican" },
    Curated { symbol: "🍣", tags: "sushi food japanese" },
    Curated { symbol: "🍰", tags: "cake dessert birthday" },
    // Animals
    Curated { symbol: "🐶", tags: "dog puppy pet" },
    Curated { symbol: "🐱", tags: "cat kitten pet" },
    Curated { symbol: "🐰", tags: "rabbit bunny" },
    Curated { symbol: "🦊", tags: "fox animal" },
    Curated { symbol: "🐻", tags: "bear animal" },
    Curated { symbol: "🐼", tags: "panda bear animal" },
    Curated { symbol: "🦁", tags: "lion animal king" },
    Curated { symbol: "🐧", tags: "penguin animal" },
    Curated { symbol: "🐍", tags: "snake python animal" },
    Curated { symbol: "🦖", tags: "dinosaur trex dino" },
    Curated { symbol: "🐙", tags: "octopus sea animal" },
    Curated { symbol: "🐬", tags: "dolphin sea animal" },
    Curated { symbol: "🦈", tags: "shark sea jaws" },
    // Arrows & Symbols
    Curated { symbol: "⬅️", tags: "arrow_left left" },
    Curated { symbol: "➡️", tags: "arrow_right right" },
    Curated { symbol: "♾️", tags: "infinity forever" },
    Curated { symbol: "💯", tags: "100 hundred perfect score" },
    Curated { symbol: "🚫", tags: "no_entry prohibited forbidden" },
];
