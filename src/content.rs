//! Copy for the landing page.

pub const AGENCY_NAME: &str = "Full Cycle Agency";
pub const AGENCY_BADGE: &str = "FUL";
pub const AGENCY_TAGLINE: &str = "дизайн · маркетинг · консалтинг";

pub struct Stat {
    pub value: &'static str,
    pub caption: &'static str,
}

pub const HERO_STATS: [Stat; 3] = [
    Stat { value: "7+", caption: "лет опыта команды" },
    Stat { value: "40+", caption: "реализованных проектов" },
    Stat { value: "3", caption: "направления: дизайн, маркетинг, консалтинг" },
];

pub struct Pillar {
    pub title: &'static str,
    pub text: &'static str,
}

pub const PILLARS: [Pillar; 3] = [
    Pillar {
        title: "Дизайн",
        text: "Айдентика, интерфейсы, лендинги, презентации: всё, что помогает бренду выглядеть связно.",
    },
    Pillar {
        title: "Маркетинг",
        text: "Стратегия, смыслы, контент, воронки, чтобы к вам приходили не только по сарафану.",
    },
    Pillar {
        title: "Консалтинг",
        text: "Помогаем разложить хаос по полочкам: продукт, позиционирование, точки роста.",
    },
];

pub struct ServiceGroup {
    pub group: &'static str,
    pub items: [&'static str; 4],
}

pub const SERVICE_GROUPS: [ServiceGroup; 4] = [
    ServiceGroup {
        group: "Дизайн & продукт",
        items: [
            "Фирменный стиль и визуальная система",
            "Дизайн промо-страниц и лендингов",
            "UI/UX для веб- и мобильных продуктов",
            "Дизайн презентаций и питч-деков",
        ],
    },
    ServiceGroup {
        group: "Маркетинг & коммуникации",
        items: [
            "Позиционирование и бренд-платформа",
            "Контент-стратегия и tone of voice",
            "Лендинги под кампании и спецпроекты",
            "Сопровождение запуска / релиза",
        ],
    },
    ServiceGroup {
        group: "Консалтинг",
        items: [
            "Аудит текущих материалов и сайта",
            "Сессии по продукту и гипотезам",
            "План первоочередных шагов",
            "Супервизия in-house команды",
        ],
    },
    ServiceGroup {
        group: "Поддержка",
        items: [
            "Дизайн по подписке",
            "Поддержка кампаний и обновлений",
            "Дизайн-сопровождение запусков",
            "Настройка процессов и шаблонов",
        ],
    },
];

pub const CONTACT_EMAIL: &str = "hello@fullcycle.agency";
pub const CONTACT_PHONE: &str = "+7 (000) 000-00-00, можно в Telegram";
pub const CONTACT_LOCATION: &str = "Работаем удалённо, созваниваемся в удобном формате";
pub const MAIL_SUBJECT: &str = "Запрос с сайта Full Cycle";

/// `mailto:` link with the subject pre-filled.
pub fn mailto() -> String {
    format!(
        "mailto:{}?subject={}",
        CONTACT_EMAIL,
        urlencoding::encode(MAIL_SUBJECT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_encodes_subject() {
        let link = mailto();
        assert!(link.starts_with("mailto:hello@fullcycle.agency?subject="));
        assert!(!link.contains(' '));
    }
}
