use crate::domain::model::Specialty;

/// 表單可選的常見門診名稱，值直接作為 benefit 篩選條件
static SPECIALTIES: [Specialty; 16] = [
    Specialty { id: "PORADNIA KARDIOLOGICZNA", name: "Kardiolog" },
    Specialty { id: "PORADNIA DERMATOLOGICZNA", name: "Dermatolog" },
    Specialty { id: "PORADNIA ENDOKRYNOLOGICZNA", name: "Endokrynolog" },
    Specialty { id: "PORADNIA GASTROENTEROLOGICZNA", name: "Gastroenterolog" },
    Specialty { id: "PORADNIA GINEKOLOGICZNO-POŁOŻNICZA", name: "Ginekolog" },
    Specialty { id: "PORADNIA NEUROLOGICZNA", name: "Neurolog" },
    Specialty { id: "PORADNIA OKULISTYCZNA", name: "Okulista" },
    Specialty { id: "PORADNIA ORTOPEDYCZNA", name: "Ortopeda" },
    Specialty { id: "PORADNIA OTORYNOLARYNGOLOGICZNA", name: "Laryngolog" },
    Specialty { id: "PORADNIA PSYCHIATRYCZNA", name: "Psychiatra" },
    Specialty { id: "PORADNIA REUMATOLOGICZNA", name: "Reumatolog" },
    Specialty { id: "PORADNIA UROLOGICZNA", name: "Urolog" },
    Specialty { id: "PORADNIA ALERGOLOGICZNA", name: "Alergolog" },
    Specialty { id: "PORADNIA DIABETOLOGICZNA", name: "Diabetolog" },
    Specialty { id: "PORADNIA ONKOLOGICZNA", name: "Onkolog" },
    Specialty { id: "PORADNIA STOMATOLOGICZNA", name: "Stomatolog" },
];

pub fn specialties() -> &'static [Specialty] {
    &SPECIALTIES
}
