use crate::domain::model::Region;

static REGIONS: [Region; 16] = [
    Region {
        id: "dolnoslaskie",
        display_name: "Dolnośląskie",
        neighbor_ids: &["lubuskie", "wielkopolskie", "opolskie"],
    },
    Region {
        id: "kujawsko-pomorskie",
        display_name: "Kujawsko-pomorskie",
        neighbor_ids: &["pomorskie", "warminsko-mazurskie", "mazowieckie", "wielkopolskie"],
    },
    Region {
        id: "lubelskie",
        display_name: "Lubelskie",
        neighbor_ids: &["podlaskie", "mazowieckie", "swietokrzyskie", "podkarpackie"],
    },
    Region {
        id: "lubuskie",
        display_name: "Lubuskie",
        neighbor_ids: &["zachodniopomorskie", "wielkopolskie", "dolnoslaskie"],
    },
    Region {
        id: "lodzkie",
        display_name: "Łódzkie",
        neighbor_ids: &["wielkopolskie", "opolskie", "slaskie", "swietokrzyskie", "mazowieckie"],
    },
    Region {
        id: "malopolskie",
        display_name: "Małopolskie",
        neighbor_ids: &["slaskie", "swietokrzyskie", "podkarpackie"],
    },
    Region {
        id: "mazowieckie",
        display_name: "Mazowieckie",
        neighbor_ids: &[
            "warminsko-mazurskie",
            "podlaskie",
            "lubelskie",
            "swietokrzyskie",
            "lodzkie",
            "kujawsko-pomorskie",
        ],
    },
    Region {
        id: "opolskie",
        display_name: "Opolskie",
        neighbor_ids: &["dolnoslaskie", "wielkopolskie", "lodzkie", "slaskie"],
    },
    Region {
        id: "podkarpackie",
        display_name: "Podkarpackie",
        neighbor_ids: &["malopolskie", "swietokrzyskie", "lubelskie"],
    },
    Region {
        id: "podlaskie",
        display_name: "Podlaskie",
        neighbor_ids: &["warminsko-mazurskie", "mazowieckie", "lubelskie"],
    },
    Region {
        id: "pomorskie",
        display_name: "Pomorskie",
        neighbor_ids: &["zachodniopomorskie", "wielkopolskie", "kujawsko-pomorskie", "warminsko-mazurskie"],
    },
    Region {
        id: "slaskie",
        display_name: "Śląskie",
        neighbor_ids: &["opolskie", "lodzkie", "swietokrzyskie", "malopolskie"],
    },
    Region {
        id: "swietokrzyskie",
        display_name: "Świętokrzyskie",
        neighbor_ids: &[
            "mazowieckie",
            "lodzkie",
            "slaskie",
            "malopolskie",
            "podkarpackie",
            "lubelskie",
        ],
    },
    Region {
        id: "warminsko-mazurskie",
        display_name: "Warmińsko-mazurskie",
        neighbor_ids: &["pomorskie", "kujawsko-pomorskie", "mazowieckie", "podlaskie"],
    },
    Region {
        id: "wielkopolskie",
        display_name: "Wielkopolskie",
        neighbor_ids: &[
            "zachodniopomorskie",
            "lubuskie",
            "dolnoslaskie",
            "opolskie",
            "lodzkie",
            "kujawsko-pomorskie",
            "pomorskie",
        ],
    },
    Region {
        id: "zachodniopomorskie",
        display_name: "Zachodniopomorskie",
        neighbor_ids: &["pomorskie", "wielkopolskie", "lubuskie"],
    },
];

// 對應 NFZ API 的 province 參數；API 代碼若變動需同步更新
static PROVINCE_CODES: [(&str, &str); 16] = [
    ("dolnoslaskie", "01"),
    ("kujawsko-pomorskie", "02"),
    ("lubelskie", "03"),
    ("lubuskie", "04"),
    ("lodzkie", "05"),
    ("malopolskie", "06"),
    ("mazowieckie", "07"),
    ("opolskie", "08"),
    ("podkarpackie", "09"),
    ("podlaskie", "10"),
    ("pomorskie", "11"),
    ("slaskie", "12"),
    ("swietokrzyskie", "13"),
    ("warminsko-mazurskie", "14"),
    ("wielkopolskie", "15"),
    ("zachodniopomorskie", "16"),
];

pub fn regions() -> &'static [Region] {
    &REGIONS
}

pub fn lookup(region_id: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|region| region.id == region_id)
}

pub fn province_code(region_id: &str) -> Option<&'static str> {
    PROVINCE_CODES
        .iter()
        .find(|(id, _)| *id == region_id)
        .map(|(_, code)| *code)
}
