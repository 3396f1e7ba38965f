//! Label tables for the composed document.
//!
//! Every human-visible string the composer emits — section titles, field
//! labels, placeholders, month names, date-range suffixes — comes from a
//! `LabelSet`, never from string literals in the composer. Two variants are
//! shipped: the Uzbek Cyrillic form layout and the terser Uzbek Latin one.
//! The variants also carry their portrait box, since the two form layouts
//! use different photo dimensions.

use crate::documents::models::DocumentType;

/// Portrait target box in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotoBox {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelVariant {
    UzbekCyrillic,
    UzbekLatin,
}

impl LabelVariant {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "uz-cyrl" => Some(LabelVariant::UzbekCyrillic),
            "uz-latn" => Some(LabelVariant::UzbekLatin),
            _ => None,
        }
    }

    pub fn labels(&self) -> &'static LabelSet {
        match self {
            LabelVariant::UzbekCyrillic => &UZBEK_CYRILLIC,
            LabelVariant::UzbekLatin => &UZBEK_LATIN,
        }
    }
}

#[derive(Debug)]
pub struct LabelSet {
    pub locale: &'static str,

    // Document titles, one per document type.
    pub title_obyektivka: &'static str,
    pub title_employment_application: &'static str,
    pub title_transfer_application: &'static str,

    // Personal information labels.
    pub birth_date: &'static str,
    pub birth_place: &'static str,
    pub nationality: &'static str,
    pub party: &'static str,
    pub education: &'static str,
    pub graduated: &'static str,
    pub specialty: &'static str,
    pub degree: &'static str,
    pub academic_title: &'static str,
    pub languages: &'static str,
    pub special_rank: &'static str,
    pub state_award: &'static str,
    pub elected_bodies: &'static str,

    // Section headings.
    pub work_history_title: &'static str,
    pub relatives_about_suffix: &'static str,
    pub relatives_info_heading: &'static str,

    // Relatives table columns.
    pub col_relation: &'static str,
    pub col_full_name: &'static str,
    pub col_birth: &'static str,
    pub col_workplace: &'static str,
    pub col_residence: &'static str,

    // Placeholders and inline fragments.
    pub none_label: &'static str,
    pub dash: &'static str,
    pub no_work_history: &'static str,
    pub deceased_note: &'static str,
    pub year_word: &'static str,
    pub years_range_suffix: &'static str,
    pub year_suffix: &'static str,
    pub present_suffix: &'static str,
    pub current_from_suffix: &'static str,

    /// 1-indexed via [`LabelSet::month_name`].
    pub months: [&'static str; 12],

    pub photo_box: PhotoBox,
}

impl LabelSet {
    /// Month name for a 1-indexed month; out-of-range yields "".
    pub fn month_name(&self, month: u32) -> &'static str {
        if (1..=12).contains(&month) {
            self.months[(month - 1) as usize]
        } else {
            ""
        }
    }

    pub fn document_title(&self, document_type: Option<DocumentType>) -> &'static str {
        match document_type {
            Some(DocumentType::EmploymentApplication) => self.title_employment_application,
            Some(DocumentType::TransferApplication) => self.title_transfer_application,
            _ => self.title_obyektivka,
        }
    }
}

pub static UZBEK_CYRILLIC: LabelSet = LabelSet {
    locale: "uz-cyrl",

    title_obyektivka: "МАЪЛУМОТНОМА",
    title_employment_application: "ИШГА ОЛИШ БЎЙИЧА АРИЗА",
    title_transfer_application: "КЎЧИРИШ БЎЙИЧА АРИЗА",

    birth_date: "Туғилган йили:",
    birth_place: "Туғилган жойи:",
    nationality: "Миллати:",
    party: "Партиявийлиги:",
    education: "Маълумоти:",
    graduated: "Тамомлаган:",
    specialty: "Маълумоти бўйича мутахассислиги:",
    degree: "Илмий даражаси:",
    academic_title: "Илмий унвони:",
    languages: "Қайси чет тилларини билади:",
    special_rank: "Ҳарбий (махсус) унвони:",
    state_award: "Давлат мукофотлари билан тақдирланганми (қанақа):",
    elected_bodies: "Халқ депутатлари, республика, вилоят, шаҳар ва туман Кенгаши депутатими ёки бошқа сайланадиган органларнинг аъзосими (тўлиқ кўрсатилиши лозим):",

    work_history_title: "МЕҲНАТ ФАОЛИЯТИ",
    relatives_about_suffix: "яқин қариндошлари хақида",
    relatives_info_heading: "МАЪЛУМОТ",

    col_relation: "Қарин-дошлиги",
    col_full_name: "Фамилияси, исми ва отасининг исми",
    col_birth: "Туғилган йили ва жойи",
    col_workplace: "Иш жойи ва лавозими",
    col_residence: "Турар жойи",

    none_label: "йўқ",
    dash: "-",
    no_work_history: "Мавжуд эмас",
    deceased_note: "вафот этган",
    year_word: "йил",
    years_range_suffix: "йй.",
    year_suffix: "й.",
    present_suffix: "ҳ.в.",
    current_from_suffix: "дан:",

    months: [
        "январ", "феврал", "март", "апрел", "май", "июн", "июл", "август", "сентябр", "октябр",
        "ноябр", "декабр",
    ],

    photo_box: PhotoBox {
        width: 100,
        height: 133,
    },
};

pub static UZBEK_LATIN: LabelSet = LabelSet {
    locale: "uz-latn",

    title_obyektivka: "MA'LUMOTNOMA",
    title_employment_application: "ISHGA OLISH BO'YICHA ARIZA",
    title_transfer_application: "KO'CHIRISH BO'YICHA ARIZA",

    birth_date: "Tug'ilgan sanasi:",
    birth_place: "Tug'ilgan joyi:",
    nationality: "Millati:",
    party: "Partiyaviyligi:",
    education: "Ma'lumoti:",
    graduated: "Tamomlagan:",
    specialty: "Ma'lumoti bo'yicha mutaxassisligi:",
    degree: "Ilmiy darajasi:",
    academic_title: "Ilmiy unvoni:",
    languages: "Qaysi chet tillarini biladi:",
    special_rank: "Harbiy (maxsus) unvoni:",
    state_award: "Davlat mukofotlari bilan taqdirlanganmi (qanaqa):",
    elected_bodies: "Xalq deputatlari respublika, viloyat, shahar va tuman Kengashi deputatimi yoki boshqa saylanadigan organlarning a'zosimi:",

    work_history_title: "MEHNAT FAOLIYATI",
    relatives_about_suffix: "yaqin qarindoshlari haqida",
    relatives_info_heading: "MA'LUMOT",

    col_relation: "Qarin-doshligi",
    col_full_name: "Familiyasi, ismi va otasining ismi",
    col_birth: "Tug'ilgan yili va joyi",
    col_workplace: "Ish joyi va lavozimi",
    col_residence: "Turar joyi",

    none_label: "yo'q",
    dash: "-",
    no_work_history: "Mavjud emas",
    deceased_note: "vafot etgan",
    year_word: "yil",
    years_range_suffix: "yy.",
    year_suffix: "y.",
    present_suffix: "h.v.",
    current_from_suffix: "dan:",

    months: [
        "yanvar", "fevral", "mart", "aprel", "may", "iyun", "iyul", "avgust", "sentabr", "oktabr",
        "noyabr", "dekabr",
    ],

    photo_box: PhotoBox {
        width: 85,
        height: 113,
    },
};
