//! Descriptive tags for sprite entries.
//!
//! Tags come from four sources, merged, sorted and capped at [`MAX_TAGS`]:
//!
//! - identifier words, plus their expansions in [`KEYWORD_TAGS`]
//! - the entry's category ([`CATEGORY_TAGS`])
//! - the entry's asset type
//! - shape elements drawn by the symbol ([`SHAPE_TAGS`])

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::svg::model::Element;

/// Upper bound on tags per entry.
pub const MAX_TAGS: usize = 20;

/// Export prefixes that carry no meaning.
static NOISE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:HS_US_EN_|Wireblock_|non-scaling-stroke-[0-9]+_)").unwrap()
});

const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "of", "to", "in", "for", "on", "with", "at",
];

/// Tags implied by drawing elements.
pub const SHAPE_TAGS: &[(&str, &[&str])] = &[
    ("circle", &["circular", "round", "sphere"]),
    ("rect", &["rectangular", "square", "box"]),
    ("polygon", &["geometric", "angular", "shape"]),
    ("line", &["linear", "straight", "line"]),
    ("path", &["custom", "vector", "drawn"]),
];

/// Tags implied by a (lowercased) category.
pub const CATEGORY_TAGS: &[(&str, &[&str])] = &[
    ("backgrounds", &["background", "backdrop", "pattern", "texture"]),
    ("business", &["business", "corporate", "professional", "work"]),
    ("dental", &["dental", "medical", "healthcare", "clinical"]),
    ("medical", &["medical", "health", "healthcare", "clinical"]),
    ("communication", &["communication", "messaging", "contact", "interaction"]),
    ("navigation", &["navigation", "direction", "wayfinding", "interface"]),
    ("social", &["social", "network", "community", "sharing"]),
    ("education", &["education", "learning", "academic", "teaching"]),
];

/// Related tags per identifier word, sorted by word.
pub const KEYWORD_TAGS: &[(&str, &[&str])] = &[
    ("abrasive", &["abrasive", "grinding", "polishing", "finishing", "rough"]),
    ("abrasives", &["abrasives", "grinding", "polishing", "finishing", "rough"]),
    ("account", &["account", "user", "profile", "login", "credentials"]),
    ("add", &["add", "plus", "new", "create", "insert"]),
    ("adhesive", &["adhesive", "glue", "bonding", "stick", "attachment"]),
    ("adhesives", &["adhesives", "glue", "bonding", "stick", "attachment"]),
    ("administration", &["administration", "delivery", "dispense", "medication", "inject"]),
    ("aesthetic", &["aesthetic", "cosmetic", "beauty", "appearance", "dental"]),
    ("airplane", &["airplane", "plane", "flight", "travel", "aviation"]),
    ("alarm", &["alarm", "clock", "alert", "reminder", "notification"]),
    ("alert", &["alert", "notification", "warning", "attention", "important"]),
    ("alginate", &["alginate", "impression", "material", "dental", "mold"]),
    ("alloy", &["alloy", "metal", "amalgam", "mixture", "dental"]),
    ("alloys", &["alloys", "metals", "amalgam", "mixtures", "dental"]),
    ("amalgam", &["amalgam", "alloy", "filling", "silver", "dental"]),
    ("analytics", &["analytics", "data", "chart", "graph", "statistics"]),
    ("analyzer", &["analyzer", "testing", "diagnostic", "lab", "clinical"]),
    ("anesthesia", &["anesthesia", "sedation", "pain", "numbing", "medical"]),
    ("anesthetic", &["anesthetic", "numbing", "pain", "local", "topical"]),
    ("anesthetics", &["anesthetics", "numbing", "pain", "local", "topical"]),
    ("angle", &["angle", "prophy", "handpiece", "dental", "attachment"]),
    ("angles", &["angles", "prophy", "handpieces", "dental", "attachments"]),
    ("apnea", &["apnea", "sleep", "breathing", "disorder", "respiratory"]),
    ("archive", &["archive", "storage", "folder", "compress", "zip"]),
    ("archwire", &["archwire", "wire", "orthodontic", "braces", "alignment"]),
    ("archwires", &["archwires", "wires", "orthodontic", "braces", "alignment"]),
    ("arrow", &["arrow", "direction", "pointer", "navigation"]),
    ("articulating", &["articulating", "occlusion", "bite", "contact", "dental"]),
    ("articulator", &["articulator", "jaw", "model", "dental", "prosthetic"]),
    ("audio", &["audio", "sound", "music", "media", "volume"]),
    ("autoclave", &["autoclave", "sterilization", "sterilizer", "pressure", "steam"]),
    ("avatar", &["avatar", "profile", "user", "picture", "icon"]),
    ("back", &["back", "previous", "return", "arrow", "undo"]),
    ("bandage", &["bandage", "dressing", "wound", "gauze", "cover"]),
    ("bandages", &["bandages", "dressings", "wound", "gauze", "cover"]),
    ("basket", &["basket", "cart", "shopping", "buy", "purchase"]),
    ("bell", &["bell", "notification", "alert", "alarm", "reminder"]),
    ("bench", &["bench", "workstation", "table", "work", "surface"]),
    ("bite", &["bite", "occlusion", "registration", "dental", "jaw"]),
    ("bladder", &["bladder", "urinary", "urine", "incontinence", "organ"]),
    ("blade", &["blade", "scalpel", "cutting", "surgical", "sharp"]),
    ("blades", &["blades", "scalpels", "cutting", "surgical", "sharp"]),
    ("bleaching", &["bleaching", "whitening", "cosmetic", "lightening", "aesthetic"]),
    ("block", &["block", "milling", "restoration", "dental", "material"]),
    ("blocks", &["blocks", "milling", "restoration", "dental", "material"]),
    ("blood", &["blood", "pressure", "vital", "monitor", "medical"]),
    ("boat", &["boat", "ship", "vessel", "marine", "water"]),
    ("bonding", &["bonding", "adhesive", "cement", "attachment", "dental"]),
    ("book", &["book", "read", "education", "learning", "library"]),
    ("box", &["box", "container", "case", "storage", "holder"]),
    ("boxes", &["boxes", "containers", "cases", "storage", "holders"]),
    ("brace", &["brace", "support", "orthopedic", "stabilization", "immobilize"]),
    ("braces", &["braces", "supports", "orthopedic", "stabilization", "immobilize"]),
    ("bracket", &["bracket", "orthodontic", "braces", "attachment", "dental"]),
    ("brackets", &["brackets", "orthodontic", "braces", "attachments", "dental"]),
    ("bridge", &["bridge", "pontic", "restoration", "prosthetic", "dental"]),
    ("bridges", &["bridges", "pontics", "restoration", "prosthetic", "dental"]),
    ("briefcase", &["briefcase", "business", "work", "bag", "office"]),
    ("bur", &["bur", "dental", "drill", "tool", "instrument"]),
    ("business", &["business", "work", "office", "corporate", "professional"]),
    ("buy", &["buy", "purchase", "shopping", "cart", "payment"]),
    ("cabinet", &["cabinet", "storage", "furniture", "organization", "casework"]),
    ("cabinetry", &["cabinetry", "cabinet", "storage", "furniture", "casework"]),
    ("cad", &["cad", "cam", "digital", "design", "computer"]),
    ("cadcam", &["cadcam", "cad/cam", "digital", "milling", "fabrication"]),
    ("calendar", &["calendar", "date", "schedule", "event", "planner"]),
    ("call", &["call", "phone", "telephone", "communication"]),
    ("cam", &["cam", "cad", "manufacturing", "milling", "fabrication"]),
    ("camera", &["camera", "imaging", "photo", "intraoral", "dental"]),
    ("cameras", &["cameras", "imaging", "photo", "intraoral", "dental"]),
    ("canal", &["canal", "root", "endodontic", "pulp", "dental"]),
    ("cancel", &["cancel", "close", "dismiss", "abort", "stop"]),
    ("car", &["car", "vehicle", "auto", "automobile", "transport"]),
    ("carbide", &["carbide", "bur", "dental", "cutting", "tool"]),
    ("card", &["card", "credit", "payment", "money", "debit"]),
    ("cardiac", &["cardiac", "heart", "cardio", "cardiovascular", "circulatory"]),
    ("cardio", &["cardio", "heart", "cardiac", "cardiovascular", "circulatory"]),
    ("cardiovascular", &["cardiovascular", "heart", "cardiac", "vascular", "circulatory"]),
    ("cart", &["cart", "shopping", "basket", "purchase", "buy"]),
    ("case", &["case", "box", "container", "storage", "holder"]),
    ("casework", &["casework", "cabinetry", "cabinet", "storage", "furniture"]),
    ("cast", &["cast", "plaster", "orthopedic", "immobilize", "fracture"]),
    ("casting", &["casting", "plaster", "orthopedic", "immobilize", "fracture"]),
    ("catheter", &["catheter", "tube", "insertion", "medical", "drainage"]),
    ("catheters", &["catheters", "tubes", "insertion", "medical", "drainage"]),
    ("cement", &["cement", "adhesive", "bonding", "luting", "dental"]),
    ("cements", &["cements", "adhesives", "bonding", "luting", "dental"]),
    ("ceramic", &["ceramic", "porcelain", "crown", "restoration", "dental"]),
    ("ceramics", &["ceramics", "porcelain", "crown", "restoration", "dental"]),
    ("certificate", &["certificate", "diploma", "credential", "award", "achievement"]),
    ("chair", &["chair", "seating", "furniture", "patient", "dental"]),
    ("chairs", &["chairs", "seating", "furniture", "patient", "dental"]),
    ("chart", &["chart", "graph", "analytics", "data", "statistics"]),
    ("chat", &["chat", "message", "communication", "conversation", "talk"]),
    ("check", &["check", "confirm", "done", "complete", "success", "verified"]),
    ("chemical", &["chemical", "solution", "reagent", "substance", "compound"]),
    ("chemicals", &["chemicals", "solutions", "reagents", "substances", "compounds"]),
    ("chemistry", &["chemistry", "lab", "analysis", "testing", "diagnostic"]),
    ("clock", &["clock", "time", "hours", "schedule", "watch"]),
    ("close", &["close", "exit", "dismiss", "cancel", "x"]),
    ("cloud", &["cloud", "storage", "server", "online", "sync"]),
    ("cog", &["cog", "gear", "settings", "configuration", "mechanical"]),
    ("compass", &["compass", "navigation", "direction", "orientation"]),
    ("composite", &["composite", "filling", "restoration", "dental", "resin"]),
    ("composites", &["composites", "fillings", "restoration", "dental", "resin"]),
    ("computer", &["computer", "pc", "technology", "device", "laptop"]),
    ("container", &["container", "storage", "holder", "box", "organizer"]),
    ("copy", &["copy", "duplicate", "clone", "replicate"]),
    ("cosmetic", &["cosmetic", "aesthetic", "beauty", "appearance", "dental"]),
    ("cpap", &["cpap", "sleep", "apnea", "breathing", "mask"]),
    ("credit", &["credit", "card", "payment", "money", "finance"]),
    ("crown", &["crown", "cap", "restoration", "dental", "prosthetic"]),
    ("crowns", &["crowns", "caps", "restoration", "dental", "prosthetic"]),
    ("culture", &["culture", "growth", "bacteria", "lab", "microbiology"]),
    ("cure", &["cure", "curing", "polymerization", "hardening", "setting"]),
    ("curette", &["curette", "scaler", "dental", "periodontal", "cleaning"]),
    ("curettes", &["curettes", "scalers", "dental", "periodontal", "cleaning"]),
    ("curing", &["curing", "cure", "polymerization", "hardening", "light"]),
    ("curtain", &["curtain", "privacy", "screen", "barrier", "room"]),
    ("curtains", &["curtains", "privacy", "screens", "barrier", "room"]),
    ("cushion", &["cushion", "pillow", "padding", "support", "comfort"]),
    ("cushions", &["cushions", "pillows", "padding", "support", "comfort"]),
    ("cut", &["cut", "remove", "move", "scissors"]),
    ("dam", &["dam", "rubber", "isolation", "barrier", "dental"]),
    ("data", &["data", "information", "analytics", "statistics", "database"]),
    ("database", &["database", "data", "storage", "server", "information"]),
    ("date", &["date", "calendar", "day", "schedule", "time"]),
    ("defibrillator", &["defibrillator", "aed", "cardiac", "emergency", "heart"]),
    ("defibrillators", &["defibrillators", "aed", "cardiac", "emergency", "heart"]),
    ("delete", &["delete", "remove", "trash", "discard", "erase"]),
    ("delivery", &["delivery", "administration", "system", "dispense", "medical"]),
    ("dental", &["dental", "tooth", "dentist", "oral", "teeth"]),
    ("dentist", &["dentist", "dental", "tooth", "oral", "healthcare"]),
    ("denture", &["denture", "prosthetic", "false", "teeth", "removable"]),
    ("dentures", &["dentures", "prosthetic", "false", "teeth", "removable"]),
    ("destination", &["destination", "location", "place", "travel"]),
    ("diagnostic", &["diagnostic", "diagnosis", "exam", "test", "assessment"]),
    ("dialysis", &["dialysis", "renal", "kidney", "filtration", "treatment"]),
    ("diamond", &["diamond", "bur", "dental", "abrasive", "cutting"]),
    ("digital", &["digital", "electronic", "imaging", "sensor", "technology"]),
    ("direction", &["directions", "navigation", "route", "arrow"]),
    ("disc", &["disc", "disk", "polishing", "abrasive", "dental"]),
    ("discs", &["discs", "disks", "polishing", "abrasive", "dental"]),
    ("disinfect", &["disinfect", "clean", "sterilize", "sanitize", "infection"]),
    ("disinfection", &["disinfection", "cleaning", "sterilization", "sanitization", "infection"]),
    ("disk", &["disk", "disc", "polishing", "abrasive", "dental"]),
    ("dispense", &["dispense", "distribute", "deliver", "apply", "administer"]),
    ("dispenser", &["dispenser", "dispense", "distribution", "delivery", "applicator"]),
    ("dispensers", &["dispensers", "dispense", "distribution", "delivery", "applicators"]),
    ("doctor", &["doctor", "medical", "physician", "health", "healthcare"]),
    ("document", &["document", "file", "paper", "page", "text"]),
    ("dollar", &["dollar", "money", "currency", "payment", "cash"]),
    ("done", &["done", "complete", "finished", "check", "success"]),
    ("dots", &["dots", "more", "options", "menu", "ellipsis"]),
    ("down", &["down", "arrow", "decrease", "descending", "south"]),
    ("download", &["download", "save", "import", "get", "retrieve"]),
    ("drain", &["drain", "drainage", "suction", "evacuation", "removal"]),
    ("drainage", &["drainage", "drain", "suction", "evacuation", "fluid"]),
    ("dressing", &["dressing", "bandage", "wound", "gauze", "cover"]),
    ("dressings", &["dressings", "bandages", "wound", "gauze", "cover"]),
    ("drill", &["drill", "tool", "bore", "dental", "equipment"]),
    ("drug", &["drug", "medicine", "pill", "medication", "pharmaceutical"]),
    ("ecg", &["ecg", "ekg", "electrocardiogram", "heart", "cardiac"]),
    ("edit", &["edit", "modify", "change", "update", "pencil"]),
    ("education", &["education", "school", "learning", "teaching", "study"]),
    ("ekg", &["ekg", "ecg", "electrocardiogram", "heart", "cardiac"]),
    ("electric", &["electric", "powered", "motor", "electrical", "battery"]),
    ("email", &["email", "mail", "message", "communication", "letter"]),
    ("emergency", &["emergency", "urgent", "critical", "ems", "rescue"]),
    ("ems", &["ems", "emergency", "ambulance", "paramedic", "response"]),
    ("endodontic", &["endodontic", "root", "canal", "pulp", "dental"]),
    ("endodontics", &["endodontics", "root", "canal", "pulp", "dental"]),
    ("envelope", &["envelope", "mail", "email", "message", "letter"]),
    ("error", &["error", "warning", "alert", "problem", "issue"]),
    ("evacuation", &["evacuation", "suction", "removal", "drainage", "hve"]),
    ("evacuator", &["evacuator", "suction", "evacuation", "hve", "dental"]),
    ("event", &["event", "calendar", "schedule", "meeting", "appointment"]),
    ("exam", &["exam", "examination", "diagnostic", "assessment", "inspection"]),
    ("examination", &["examination", "exam", "diagnostic", "assessment", "inspection"]),
    ("explorer", &["explorer", "probe", "diagnostic", "examination", "dental"]),
    ("eyewear", &["eyewear", "glasses", "goggles", "protection", "safety"]),
    ("favorite", &["favorite", "star", "like", "bookmark", "preferred"]),
    ("feeding", &["feeding", "nutrition", "eating", "food", "nourishment"]),
    ("file", &["file", "endodontic", "root", "canal", "dental"]),
    ("files", &["files", "endodontic", "root", "canal", "dental"]),
    ("find", &["find", "search", "locate", "discover"]),
    ("finishing", &["finishing", "polishing", "smoothing", "abrasive", "final"]),
    ("fluoride", &["fluoride", "preventive", "treatment", "dental", "protection"]),
    ("folder", &["folder", "directory", "files", "organize", "storage"]),
    ("forceps", &["forceps", "clamp", "surgical", "instrument", "grasp"]),
    ("forward", &["forward", "next", "arrow", "continue", "proceed"]),
    ("gas", &["gas", "oxygen", "anesthesia", "medical", "breathing"]),
    ("gear", &["gear", "settings", "configuration", "options", "cog"]),
    ("glass", &["glass", "ionomer", "cement", "restorative", "dental"]),
    ("glasses", &["glasses", "eyewear", "spectacles", "protection", "vision"]),
    ("glove", &["glove", "hand", "protection", "ppe", "disposable"]),
    ("gloves", &["gloves", "hand", "protection", "ppe", "disposable"]),
    ("goggles", &["goggles", "eyewear", "protection", "safety", "shield"]),
    ("graduation", &["graduation", "education", "degree", "school", "diploma"]),
    ("graph", &["graph", "chart", "analytics", "data", "statistics"]),
    ("group", &["group", "team", "people", "collective", "users"]),
    ("gutta", &["gutta", "percha", "endodontic", "filling", "root"]),
    ("gypsum", &["gypsum", "stone", "plaster", "model", "dental"]),
    ("hamburger", &["hamburger", "menu", "navigation", "options"]),
    ("hand", &["hand", "glove", "manual", "grip", "finger"]),
    ("handpiece", &["handpiece", "dental", "drill", "tool", "rotary"]),
    ("handpieces", &["handpieces", "dental", "drills", "tools", "rotary"]),
    ("health", &["health", "medical", "healthcare", "wellness", "medicine"]),
    ("healthcare", &["healthcare", "health", "medical", "medicine", "care"]),
    ("heart", &["heart", "cardiac", "cardio", "cardiovascular", "pulse"]),
    ("help", &["help", "support", "question", "info", "assistance"]),
    ("hematology", &["hematology", "blood", "testing", "lab", "diagnostic"]),
    ("home", &["home", "house", "main", "start", "beginning"]),
    ("hospital", &["hospital", "medical", "health", "clinic", "care"]),
    ("hve", &["hve", "evacuator", "suction", "high-volume", "evacuation"]),
    ("hypodermic", &["hypodermic", "needle", "syringe", "injection", "subcutaneous"]),
    ("image", &["image", "picture", "photo", "media", "gallery"]),
    ("imaging", &["imaging", "diagnostic", "radiology", "scan", "picture"]),
    ("immunology", &["immunology", "immune", "antibody", "testing", "diagnostic"]),
    ("impression", &["impression", "mold", "cast", "dental", "imprint"]),
    ("impressioning", &["impressioning", "impression", "molding", "casting", "dental"]),
    ("incontinence", &["incontinence", "urinary", "bladder", "control", "management"]),
    ("info", &["info", "information", "help", "about", "details"]),
    ("information", &["information", "info", "help", "details", "about"]),
    ("internet", &["internet", "web", "network", "online", "connection"]),
    ("ionomer", &["ionomer", "glass", "cement", "restorative", "dental"]),
    ("irrigating", &["irrigating", "irrigation", "flushing", "cleaning", "rinsing"]),
    ("irrigation", &["irrigation", "flushing", "cleaning", "rinsing", "fluid"]),
    ("isolation", &["isolation", "dam", "rubber", "barrier", "separation"]),
    ("key", &["key", "password", "access", "unlock", "security"]),
    ("kidney", &["kidney", "renal", "dialysis", "organ", "urinary"]),
    ("laptop", &["laptop", "computer", "notebook", "device", "portable"]),
    ("laser", &["laser", "light", "surgical", "cutting", "technology"]),
    ("lasers", &["lasers", "light", "surgical", "cutting", "technology"]),
    ("learning", &["learning", "education", "study", "training", "knowledge"]),
    ("left", &["left", "arrow", "back", "previous", "west"]),
    ("like", &["like", "favorite", "heart", "approve", "thumbs"]),
    ("liner", &["liner", "base", "cement", "protective", "dental"]),
    ("liners", &["liners", "bases", "cements", "protective", "dental"]),
    ("location", &["place", "location", "destination", "map", "navigation", "pin"]),
    ("lock", &["lock", "secure", "privacy", "protected", "security"]),
    ("loupe", &["loupe", "magnification", "vision", "optical", "dental"]),
    ("loupes", &["loupes", "magnification", "vision", "optical", "dental"]),
    ("magnification", &["magnification", "loupe", "zoom", "enlargement", "optical"]),
    ("mail", &["mail", "email", "message", "communication", "letter", "post"]),
    ("map", &["map", "navigation", "location", "geography", "directions"]),
    ("marker", &["marker", "pin", "location", "place"]),
    ("marketing", &["marketing", "promotion", "advertising", "practice", "business"]),
    ("matrix", &["matrix", "band", "dental", "restoration", "forming"]),
    ("measurement", &["measurement", "measuring", "scale", "gauge", "assessment"]),
    ("measuring", &["measuring", "measurement", "gauge", "scale", "dimension"]),
    ("media", &["media", "culture", "growth", "laboratory", "microbiology"]),
    ("medical", &["medical", "health", "healthcare", "medicine", "doctor"]),
    ("medicine", &["medicine", "medical", "health", "drug", "pill"]),
    ("menu", &["menu", "navigation", "list", "options", "hamburger"]),
    ("message", &["message", "chat", "communication", "text", "conversation"]),
    ("microbiology", &["microbiology", "bacteria", "culture", "lab", "organism"]),
    ("mill", &["mill", "milling", "fabrication", "cad", "cam"]),
    ("milling", &["milling", "fabrication", "cad", "cam", "dental"]),
    ("mixing", &["mixing", "blending", "combination", "dispensing", "preparation"]),
    ("mobile", &["mobile", "phone", "smartphone", "device", "portable"]),
    ("mobility", &["mobility", "movement", "transfer", "wheelchair", "walker"]),
    ("model", &["model", "cast", "replica", "impression", "dental"]),
    ("money", &["money", "cash", "payment", "currency", "finance"]),
    ("monitor", &["monitor", "vital", "signs", "tracking", "display"]),
    ("moon", &["moon", "night", "lunar", "weather", "dark"]),
    ("more", &["more", "options", "dots", "menu", "additional"]),
    ("music", &["music", "audio", "sound", "media", "song"]),
    ("mute", &["mute", "silence", "volume", "audio", "quiet"]),
    ("navigate", &["navigation", "directions", "route", "map"]),
    ("needle", &["needle", "injection", "syringe", "hypodermic", "sharp"]),
    ("needles", &["needles", "injections", "syringes", "hypodermic", "sharp"]),
    ("network", &["network", "connection", "internet", "wifi", "web"]),
    ("next", &["next", "forward", "arrow", "continue", "proceed"]),
    ("nitrous", &["nitrous", "oxide", "sedation", "anesthesia", "gas"]),
    ("notification", &["notification", "alert", "bell", "reminder", "notice"]),
    ("nurse", &["nurse", "medical", "healthcare", "health", "care"]),
    ("nutrition", &["nutrition", "feeding", "diet", "food", "supplement"]),
    ("obturation", &["obturation", "filling", "endodontic", "sealing", "root"]),
    ("obturator", &["obturator", "obturation", "filling", "endodontic", "instrument"]),
    ("occlusion", &["occlusion", "bite", "contact", "articulating", "dental"]),
    ("office", &["office", "practice", "administration", "front", "business"]),
    ("options", &["options", "settings", "preferences", "configuration", "menu"]),
    ("organization", &["organization", "storage", "arrangement", "system", "order"]),
    ("orthodontic", &["orthodontic", "braces", "bracket", "alignment", "dental"]),
    ("orthodontics", &["orthodontics", "braces", "brackets", "alignment", "dental"]),
    ("orthopedic", &["orthopedic", "bone", "joint", "musculoskeletal", "fracture"]),
    ("orthopedics", &["orthopedics", "bone", "joint", "musculoskeletal", "fracture"]),
    ("oxide", &["oxide", "nitrous", "gas", "anesthesia", "sedation"]),
    ("oximeter", &["oximeter", "pulse", "oxygen", "saturation", "monitoring"]),
    ("oxygen", &["oxygen", "respiratory", "breathing", "gas", "medical"]),
    ("page", &["page", "document", "paper", "sheet", "file"]),
    ("paper", &["paper", "document", "page", "sheet", "file"]),
    ("password", &["password", "key", "security", "credentials", "login"]),
    ("paste", &["paste", "prophy", "polishing", "cleaning", "dental"]),
    ("patient", &["patient", "care", "person", "individual", "medical"]),
    ("pause", &["pause", "stop", "media", "video", "audio"]),
    ("payment", &["payment", "pay", "money", "transaction", "purchase"]),
    ("pdf", &["pdf", "document", "file", "adobe", "portable"]),
    ("pencil", &["pencil", "edit", "write", "draw", "modify"]),
    ("people", &["people", "users", "group", "team", "community"]),
    ("percha", &["percha", "gutta", "endodontic", "filling", "root"]),
    ("periodontal", &["periodontal", "gum", "dental", "tissue", "oral"]),
    ("person", &["person", "user", "human", "people", "profile"]),
    ("phone", &["phone", "mobile", "device", "smartphone", "cell"]),
    ("photo", &["photo", "image", "picture", "camera", "media"]),
    ("picture", &["picture", "image", "photo", "media"]),
    ("pill", &["pill", "medicine", "drug", "medication", "tablet"]),
    ("pillow", &["pillow", "cushion", "support", "comfort", "padding"]),
    ("pillows", &["pillows", "cushions", "support", "comfort", "padding"]),
    ("pin", &["pin", "post", "endodontic", "retention", "dental"]),
    ("pins", &["pins", "posts", "endodontic", "retention", "dental"]),
    ("place", &["place", "location", "destination", "map", "navigation", "pin"]),
    ("plane", &["plane", "airplane", "flight", "travel", "aviation"]),
    ("play", &["play", "video", "media", "start", "audio"]),
    ("plus", &["plus", "add", "new", "create", "increase"]),
    ("polisher", &["polisher", "finishing", "dental", "abrasive", "smooth"]),
    ("polishers", &["polishers", "finishing", "dental", "abrasive", "smooth"]),
    ("polishing", &["polishing", "finishing", "abrasive", "smooth", "dental"]),
    ("porcelain", &["porcelain", "ceramic", "crown", "veneer", "dental"]),
    ("positioning", &["positioning", "placement", "support", "alignment", "arrangement"]),
    ("post", &["post", "pin", "endodontic", "retention", "core"]),
    ("posts", &["posts", "pins", "endodontic", "retention", "core"]),
    ("power", &["power", "electric", "motor", "drive", "energy"]),
    ("practice", &["practice", "office", "clinic", "dental", "medical"]),
    ("preferences", &["preferences", "settings", "options", "configuration"]),
    ("presentation", &["presentation", "slides", "meeting", "display", "pitch"]),
    ("pressure", &["pressure", "blood", "vital", "monitor", "bp"]),
    ("preventive", &["preventive", "prevention", "prophylactic", "protective", "dental"]),
    ("previous", &["previous", "back", "arrow", "return"]),
    ("price", &["price", "cost", "money", "payment", "tag"]),
    ("privacy", &["privacy", "screen", "curtain", "confidential", "barrier"]),
    ("probe", &["probe", "explorer", "diagnostic", "examination", "dental"]),
    ("profile", &["profile", "user", "account", "person", "avatar"]),
    ("prophy", &["prophy", "prophylaxis", "cleaning", "polishing", "dental"]),
    ("prophylaxis", &["prophylaxis", "prophy", "cleaning", "prevention", "dental"]),
    ("prosthetic", &["prosthetic", "artificial", "replacement", "implant", "device"]),
    ("prosthetics", &["prosthetics", "artificial", "replacement", "implant", "devices"]),
    ("protect", &["protect", "shield", "security", "safe", "guard"]),
    ("provisional", &["provisional", "temporary", "interim", "temp", "transitional"]),
    ("pulse", &["pulse", "heart", "rate", "vital", "oximeter"]),
    ("pump", &["pump", "vacuum", "suction", "pressure", "device"]),
    ("pumps", &["pumps", "vacuum", "suction", "pressure", "devices"]),
    ("purchase", &["purchase", "buy", "shopping", "payment", "cart"]),
    ("question", &["question", "help", "info", "query", "ask"]),
    ("rain", &["rain", "weather", "wet", "precipitation", "shower"]),
    ("read", &["read", "book", "reading", "study", "literature"]),
    ("reagent", &["reagent", "chemical", "solution", "test", "laboratory"]),
    ("reagents", &["reagents", "chemicals", "solutions", "tests", "laboratory"]),
    ("recliner", &["recliner", "chair", "seating", "patient", "dental"]),
    ("recliners", &["recliners", "chairs", "seating", "patient", "dental"]),
    ("refresh", &["refresh", "reload", "sync", "update", "renew"]),
    ("remove", &["remove", "delete", "trash", "discard"]),
    ("renal", &["renal", "kidney", "dialysis", "urinary", "medical"]),
    ("report", &["report", "document", "analysis", "data", "chart"]),
    ("reprocessing", &["reprocessing", "sterilization", "cleaning", "instrument", "preparation"]),
    ("resin", &["resin", "composite", "restoration", "dental", "material"]),
    ("resins", &["resins", "composites", "restoration", "dental", "materials"]),
    ("restoration", &["restoration", "restorative", "dental", "repair", "filling"]),
    ("restorative", &["restorative", "restoration", "dental", "repair", "filling"]),
    ("retraction", &["retraction", "tissue", "displacement", "management", "gingival"]),
    ("retractor", &["retractor", "tissue", "surgical", "holding", "exposure"]),
    ("retractors", &["retractors", "tissue", "surgical", "holding", "exposure"]),
    ("right", &["right", "arrow", "forward", "next", "east"]),
    ("rinse", &["rinse", "irrigation", "flushing", "cleaning", "wash"]),
    ("root", &["root", "canal", "endodontic", "tooth", "dental"]),
    ("rubber", &["rubber", "dam", "isolation", "latex", "dental"]),
    ("save", &["save", "disk", "store", "preserve", "keep"]),
    ("scale", &["scale", "weight", "measurement", "balance", "weighing"]),
    ("scaler", &["scaler", "curette", "dental", "periodontal", "cleaning"]),
    ("scalers", &["scalers", "curettes", "dental", "periodontal", "cleaning"]),
    ("scales", &["scales", "weight", "measurement", "balance", "weighing"]),
    ("scalpel", &["scalpel", "blade", "surgical", "cutting", "knife"]),
    ("scalpels", &["scalpels", "blades", "surgical", "cutting", "knives"]),
    ("schedule", &["schedule", "calendar", "plan", "time", "agenda"]),
    ("school", &["school", "education", "learning", "study", "academy"]),
    ("scissor", &["scissor", "cut", "surgical", "instrument", "shear"]),
    ("scissors", &["scissors", "cut", "surgical", "instrument", "shears"]),
    ("screen", &["screen", "privacy", "curtain", "barrier", "divider"]),
    ("screens", &["screens", "privacy", "curtains", "barrier", "divider"]),
    ("sealant", &["sealant", "sealing", "preventive", "protection", "dental"]),
    ("search", &["search", "find", "magnify", "lookup", "discover"]),
    ("secure", &["secure", "lock", "safe", "protected", "security"]),
    ("security", &["security", "secure", "lock", "protected", "safe"]),
    ("sedation", &["sedation", "anesthesia", "conscious", "calming", "medical"]),
    ("sensor", &["sensor", "digital", "detector", "imaging", "electronic"]),
    ("sensors", &["sensors", "digital", "detectors", "imaging", "electronic"]),
    ("server", &["server", "database", "network", "cloud", "hosting"]),
    ("settings", &["settings", "configuration", "preferences", "options", "gear"]),
    ("share", &["share", "send", "distribute", "export", "publish"]),
    ("shear", &["shear", "cut", "scissors", "surgical", "instrument"]),
    ("shears", &["shears", "cut", "scissors", "surgical", "instrument"]),
    ("shield", &["shield", "protect", "security", "safe", "defense"]),
    ("ship", &["ship", "boat", "vessel", "marine", "nautical"]),
    ("shopping", &["shopping", "cart", "buy", "purchase", "store"]),
    ("silver", &["silver", "amalgam", "metal", "alloy", "dental"]),
    ("sleep", &["sleep", "apnea", "cpap", "breathing", "respiratory"]),
    ("snow", &["snow", "weather", "winter", "cold", "precipitation"]),
    ("solution", &["solution", "liquid", "chemical", "reagent", "fluid"]),
    ("solutions", &["solutions", "liquids", "chemicals", "reagents", "fluids"]),
    ("speaker", &["speaker", "audio", "sound", "volume", "music"]),
    ("splint", &["splint", "immobilize", "stabilize", "fracture", "orthopedic"]),
    ("splinting", &["splinting", "immobilize", "stabilize", "fracture", "orthopedic"]),
    ("sponge", &["sponge", "gauze", "absorbent", "surgical", "cleaning"]),
    ("sponges", &["sponges", "gauze", "absorbent", "surgical", "cleaning"]),
    ("staff", &["staff", "personnel", "team", "employee", "worker"]),
    ("staple", &["staple", "fastener", "clip", "surgical", "closure"]),
    ("staples", &["staples", "fasteners", "clips", "surgical", "closure"]),
    ("star", &["star", "favorite", "rating", "celestial", "night"]),
    ("statistics", &["statistics", "data", "analytics", "chart", "graph"]),
    ("steel", &["steel", "bur", "metal", "dental", "tool"]),
    ("sterilization", &["sterilization", "autoclave", "disinfection", "infection", "control"]),
    ("sterilizer", &["sterilizer", "autoclave", "sterilization", "disinfection", "equipment"]),
    ("sterilizers", &["sterilizers", "autoclaves", "sterilization", "disinfection", "equipment"]),
    ("stethoscope", &["stethoscope", "listening", "heart", "lung", "diagnostic"]),
    ("stethoscopes", &["stethoscopes", "listening", "heart", "lung", "diagnostic"]),
    ("stone", &["stone", "gypsum", "model", "cast", "dental"]),
    ("stool", &["stool", "seating", "furniture", "chair", "mobile"]),
    ("stools", &["stools", "seating", "furniture", "chairs", "mobile"]),
    ("stop", &["stop", "pause", "media", "end", "cancel"]),
    ("storage", &["storage", "container", "organization", "holder", "cabinet"]),
    ("storm", &["storm", "weather", "thunder", "lightning", "severe"]),
    ("strip", &["strip", "abrasive", "finishing", "polishing", "dental"]),
    ("strips", &["strips", "abrasive", "finishing", "polishing", "dental"]),
    ("study", &["study", "learning", "education", "school", "research"]),
    ("success", &["success", "complete", "done", "check", "approved"]),
    ("suction", &["suction", "evacuation", "aspiration", "vacuum", "removal"]),
    ("sun", &["sun", "sunny", "weather", "day", "bright"]),
    ("supplement", &["supplement", "vitamin", "nutrition", "dietary", "addition"]),
    ("supplements", &["supplements", "vitamins", "nutrition", "dietary", "additions"]),
    ("supplies", &["supplies", "materials", "consumables", "inventory", "stock"]),
    ("support", &["support", "brace", "assist", "stabilize", "orthopedic"]),
    ("supports", &["supports", "braces", "assist", "stabilize", "orthopedic"]),
    ("surgery", &["surgery", "surgical", "operation", "procedure", "medical"]),
    ("surgical", &["surgical", "surgery", "operation", "procedure", "medical"]),
    ("suture", &["suture", "stitch", "wound", "surgical", "closure"]),
    ("sutures", &["sutures", "stitches", "wound", "surgical", "closure"]),
    ("sync", &["sync", "synchronize", "refresh", "update", "cloud"]),
    ("syringe", &["syringe", "injection", "needle", "medication", "hypodermic"]),
    ("syringes", &["syringes", "injections", "needles", "medication", "hypodermic"]),
    ("system", &["system", "equipment", "technology", "device", "apparatus"]),
    ("systems", &["systems", "equipment", "technology", "devices", "apparatus"]),
    ("table", &["table", "furniture", "surface", "exam", "procedure"]),
    ("tables", &["tables", "furniture", "surface", "exam", "procedure"]),
    ("tablet", &["tablet", "device", "ipad", "mobile", "touchscreen"]),
    ("tag", &["tag", "label", "price", "category", "mark"]),
    ("tape", &["tape", "adhesive", "bandage", "medical", "securing"]),
    ("tapes", &["tapes", "adhesive", "bandages", "medical", "securing"]),
    ("team", &["team", "group", "people", "collaboration", "users"]),
    ("technology", &["technology", "tech", "digital", "computer", "electronic"]),
    ("teeth", &["teeth", "dental", "tooth", "dentist", "oral"]),
    ("temporary", &["temporary", "temp", "provisional", "interim", "short-term"]),
    ("thermometer", &["thermometer", "temperature", "vital", "fever", "medical"]),
    ("thermometers", &["thermometers", "temperature", "vital", "fever", "medical"]),
    ("tick", &["tick", "check", "done", "complete", "verified"]),
    ("time", &["time", "clock", "schedule", "hours", "duration"]),
    ("timer", &["timer", "clock", "countdown", "stopwatch", "time"]),
    ("tool", &["tool", "wrench", "settings", "repair", "fix"]),
    ("tooth", &["tooth", "dental", "teeth", "dentist", "oral"]),
    ("train", &["train", "railway", "rail", "transport", "station"]),
    ("transfer", &["transfer", "move", "patient", "mobility", "transport"]),
    ("trash", &["trash", "delete", "remove", "bin", "discard"]),
    ("tray", &["tray", "organizer", "holder", "storage", "container"]),
    ("trays", &["trays", "organizers", "holders", "storage", "containers"]),
    ("truck", &["truck", "vehicle", "delivery", "transport", "lorry"]),
    ("ultrasound", &["ultrasound", "imaging", "diagnostic", "sonography", "medical"]),
    ("uniform", &["uniform", "apparel", "clothing", "scrubs", "staff"]),
    ("uniforms", &["uniforms", "apparel", "clothing", "scrubs", "staff"]),
    ("unit", &["unit", "system", "device", "equipment", "machine"]),
    ("units", &["units", "systems", "devices", "equipment", "machines"]),
    ("unlock", &["unlock", "open", "access", "unsecure"]),
    ("up", &["up", "arrow", "increase", "ascending", "north"]),
    ("update", &["update", "upgrade", "refresh", "new", "sync"]),
    ("upload", &["upload", "export", "send", "transfer", "share"]),
    ("urinary", &["urinary", "urine", "bladder", "kidney", "renal"]),
    ("user", &["user", "person", "profile", "account", "avatar"]),
    ("vacuum", &["vacuum", "suction", "negative", "pressure", "evacuation"]),
    ("vehicle", &["vehicle", "car", "transport", "auto", "transportation"]),
    ("video", &["video", "media", "play", "movie", "film"]),
    ("vital", &["vital", "signs", "monitor", "health", "medical"]),
    ("vitamin", &["vitamin", "supplement", "nutrition", "dietary", "nutrient"]),
    ("vitamins", &["vitamins", "supplements", "nutrition", "dietary", "nutrients"]),
    ("volume", &["volume", "audio", "sound", "speaker", "music"]),
    ("walker", &["walker", "mobility", "ambulation", "assist", "support"]),
    ("warning", &["warning", "alert", "caution", "attention", "notice"]),
    ("wax", &["wax", "dental", "laboratory", "modeling", "impression"]),
    ("waxing", &["waxing", "wax", "modeling", "dental", "laboratory"]),
    ("weather", &["weather", "climate", "forecast", "conditions", "sky"]),
    ("web", &["web", "internet", "www", "online", "browser"]),
    ("wheelchair", &["wheelchair", "mobility", "transport", "chair", "patient"]),
    ("whitening", &["whitening", "bleaching", "cosmetic", "brightening", "aesthetic"]),
    ("wifi", &["wifi", "wireless", "network", "internet", "connection"]),
    ("wind", &["wind", "weather", "breeze", "air", "windy"]),
    ("wire", &["wire", "orthodontic", "archwire", "metal", "braces"]),
    ("work", &["work", "job", "business", "office", "professional"]),
    ("workstation", &["workstation", "desk", "bench", "work", "station"]),
    ("workstations", &["workstations", "desks", "benches", "work", "stations"]),
    ("wrench", &["wrench", "tool", "settings", "repair", "fix"]),
    ("xray", &["xray", "radiograph", "imaging", "diagnostic", "radiation"]),
    ("zip", &["zip", "compress", "archive", "package", "bundle"]),
];

/// Meaningful lowercase words of an identifier.
pub fn keywords(identifier: &str) -> Vec<String> {
    NOISE_PREFIX
        .replace(identifier, "")
        .to_lowercase()
        .split(['-', '_'])
        .filter(|word| !word.is_empty() && !STOP_WORDS.contains(word))
        .map(str::to_string)
        .collect()
}

/// Expansion of one identifier word, if the table knows it.
pub fn related(keyword: &str) -> Option<&'static [&'static str]> {
    KEYWORD_TAGS
        .binary_search_by(|(word, _)| (*word).cmp(keyword))
        .ok()
        .map(|i| KEYWORD_TAGS[i].1)
}

/// Shape tags for the elements drawn under `content`.
pub fn shape_tags(content: &Element) -> BTreeSet<&'static str> {
    let mut tags = BTreeSet::new();
    for el in content.iter() {
        let shape = match el.local_name() {
            "circle" => "circle",
            "rect" => "rect",
            "polygon" => "polygon",
            "line" | "polyline" => "line",
            "path" => "path",
            _ => continue,
        };
        tags.extend(lookup(SHAPE_TAGS, shape).iter().copied());
    }
    tags
}

/// Sorted, de-duplicated tags for one sprite entry.
pub fn generate(
    identifier: &str,
    category: &str,
    asset_type: &str,
    content: Option<&Element>,
) -> Vec<String> {
    let mut tags: BTreeSet<String> = BTreeSet::new();
    for word in keywords(identifier) {
        if let Some(extra) = related(&word) {
            tags.extend(extra.iter().map(|t| t.to_string()));
        }
        tags.insert(word);
    }

    let category = category.to_lowercase();
    tags.extend(lookup(CATEGORY_TAGS, &category).iter().map(|t| t.to_string()));

    if !asset_type.is_empty() {
        tags.insert(asset_type.to_lowercase());
    }
    if let Some(content) = content {
        tags.extend(shape_tags(content).into_iter().map(str::to_string));
    }

    tags.into_iter().take(MAX_TAGS).collect()
}

fn lookup(table: &[(&str, &'static [&'static str])], key: &str) -> &'static [&'static str] {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, tags)| *tags)
        .unwrap_or_default()
}
