//! Built-in name, venue and colour pools for generated teams.

/// `(name, short code)`; short codes fit the 4-character limit.
pub const CLUB_NAMES: [(&str, &str); 50] = [
    ("Manchester United", "MUN"),
    ("Liverpool FC", "LIV"),
    ("Arsenal FC", "ARS"),
    ("Chelsea FC", "CHE"),
    ("Manchester City", "MCI"),
    ("Tottenham Hotspur", "TOT"),
    ("Newcastle United", "NEW"),
    ("Brighton & Hove", "BHA"),
    ("West Ham United", "WHU"),
    ("Aston Villa", "AVL"),
    ("Real Madrid", "RMA"),
    ("FC Barcelona", "BAR"),
    ("Atletico Madrid", "ATM"),
    ("Sevilla FC", "SEV"),
    ("Valencia CF", "VAL"),
    ("Real Sociedad", "RSO"),
    ("Athletic Bilbao", "ATH"),
    ("Villarreal CF", "VIL"),
    ("Real Betis", "BET"),
    ("Celta Vigo", "CEL"),
    ("Juventus FC", "JUV"),
    ("AC Milan", "MIL"),
    ("Inter Milan", "INT"),
    ("AS Roma", "ROM"),
    ("SSC Napoli", "NAP"),
    ("Atalanta BC", "ATA"),
    ("Lazio SS", "LAZ"),
    ("Fiorentina", "FIO"),
    ("Torino FC", "TOR"),
    ("Bologna FC", "BOL"),
    ("Bayern Munich", "BAY"),
    ("Borussia Dortmund", "BVB"),
    ("RB Leipzig", "RBL"),
    ("Bayer Leverkusen", "B04"),
    ("Eintracht Frankfurt", "SGE"),
    ("VfL Wolfsburg", "WOB"),
    ("SC Freiburg", "SCF"),
    ("Borussia M'gladbach", "BMG"),
    ("FC Union Berlin", "FCU"),
    ("VfB Stuttgart", "VFB"),
    ("Paris Saint-Germain", "PSG"),
    ("Olympique Marseille", "OM"),
    ("AS Monaco", "ASM"),
    ("Olympique Lyon", "OL"),
    ("OGC Nice", "NIC"),
    ("Stade Rennais", "REN"),
    ("RC Lens", "RCL"),
    ("Lille OSC", "LIL"),
    ("Nantes FC", "FCN"),
    ("Montpellier HSC", "MON"),
];

pub const CITIES: [&str; 30] = [
    "Manchester", "Liverpool", "London", "Birmingham", "Newcastle", "Brighton",
    "Madrid", "Barcelona", "Seville", "Valencia", "San Sebastian", "Bilbao",
    "Turin", "Milan", "Rome", "Naples", "Bergamo", "Florence",
    "Munich", "Dortmund", "Leipzig", "Leverkusen", "Frankfurt", "Wolfsburg",
    "Paris", "Marseille", "Monaco", "Lyon", "Nice", "Rennes",
];

pub const STADIUMS: [&str; 21] = [
    "Old Trafford", "Anfield", "Emirates Stadium", "Stamford Bridge", "Etihad Stadium",
    "Santiago Bernabeu", "Camp Nou", "Wanda Metropolitano", "Ramon Sanchez Pizjuan",
    "Allianz Stadium", "San Siro", "Stadio Olimpico", "Stadio San Paolo",
    "Allianz Arena", "Signal Iduna Park", "Red Bull Arena", "BayArena",
    "Parc des Princes", "Orange Velodrome", "Stade Louis II", "Groupama Stadium",
];

pub const PRIMARY_COLORS: [&str; 16] = [
    "#FF0000", "#0000FF", "#FFFFFF", "#000000", "#00FF00", "#FFFF00", "#800080", "#FFA500",
    "#008080", "#800000", "#DC143C", "#4169E1", "#228B22", "#1E90FF", "#8B0000", "#191970",
];

pub const SECONDARY_COLORS: [&str; 12] = [
    "#FFFFFF", "#000000", "#C0C0C0", "#FFD700", "#FF0000", "#0000FF", "#008000", "#FFFF00",
    "#F5F5DC", "#708090", "#87CEEB", "#D3D3D3",
];
