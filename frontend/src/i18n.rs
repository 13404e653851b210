//! Bilingual site copy. Everything the page prints comes from here, keyed by
//! [`Language`].

use crate::config::banner;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Language::Ar
    }

    pub fn dir(self) -> &'static str {
        if self.is_rtl() {
            "rtl"
        } else {
            "ltr"
        }
    }

    /// Width after which this language's marquee text repeats.
    pub fn banner_loop_width(self) -> f64 {
        match self {
            Language::En => banner::LOOP_WIDTH_LTR,
            Language::Ar => banner::LOOP_WIDTH_RTL,
        }
    }

    /// Name shown in the language dropdown, written in the language itself.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "ENGLISH",
            Language::Ar => "العربية",
        }
    }
}

pub struct NavText {
    pub logo: &'static str,
    pub home: &'static str,
    pub about: &'static str,
    pub services: &'static str,
    pub projects: &'static str,
    pub news: &'static str,
    pub contact: &'static str,
}

impl NavText {
    /// Label for a section id used by the navigation links.
    pub fn label_for(&self, section: &str) -> &'static str {
        match section {
            "about" => self.about,
            "services" => self.services,
            "projects" => self.projects,
            "news" => self.news,
            "contact" => self.contact,
            _ => self.home,
        }
    }
}

pub struct HeroText {
    pub title: &'static str,
}

pub struct AboutText {
    pub title: &'static str,
    pub paragraph1: &'static str,
    pub paragraph2: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceText {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub place: &'static str,
    pub full_description: &'static str,
    pub image: &'static str,
}

pub struct ServicesText {
    pub title: &'static str,
    pub location: &'static str,
    pub about_label: &'static str,
    pub scroll: &'static str,
    pub read_more: &'static str,
    pub built_on: &'static str,
    pub intro: &'static str,
    pub items: [ServiceText; 6],
}

pub struct FeaturedProjectText {
    pub featured: &'static str,
    pub title: &'static str,
    pub year: &'static str,
    pub location: &'static str,
    pub learn_more: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectItem {
    pub title: &'static str,
    pub category: &'static str,
    pub year: &'static str,
    pub location: &'static str,
}

pub struct ProjectsGalleryText {
    pub learn_more: &'static str,
    pub description: &'static str,
    pub items: [ProjectItem; 8],
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewsArticle {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub text: &'static str,
    pub image: &'static str,
}

pub struct NewsText {
    pub title: &'static str,
    pub read_more: &'static str,
    pub articles: [NewsArticle; 3],
}

pub struct ContactText {
    pub title: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub email: &'static str,
    pub message: &'static str,
    pub send: &'static str,
    pub sent: &'static str,
    pub missing_fields: &'static str,
}

pub struct Translations {
    pub nav: NavText,
    pub hero: HeroText,
    pub about: AboutText,
    pub services: ServicesText,
    pub projects: FeaturedProjectText,
    pub projects_gallery: ProjectsGalleryText,
    pub news: NewsText,
    pub contact: ContactText,
    pub language: &'static str,
}

pub fn translations(language: Language) -> &'static Translations {
    match language {
        Language::En => &EN,
        Language::Ar => &AR,
    }
}

const IMG_ARCHITECTURE: &str = "https://images.pexels.com/photos/439416/pexels-photo-439416.jpeg";
const IMG_INTERIOR: &str = "https://images.pexels.com/photos/1109541/pexels-photo-1109541.jpeg";
const IMG_URBAN: &str = "https://images.pexels.com/photos/3862130/pexels-photo-3862130.jpeg";
const IMG_LANDSCAPE: &str = "https://images.pexels.com/photos/1092359/pexels-photo-1092359.jpeg";
const IMG_SUSTAINABILITY: &str = "https://images.pexels.com/photos/3862623/pexels-photo-3862623.jpeg";
const IMG_RENOVATION: &str = "https://images.pexels.com/photos/1457842/pexels-photo-1457842.jpeg";
const IMG_NEWS_FUTURE: &str = "https://images.pexels.com/photos/2098427/pexels-photo-2098427.jpeg";

static EN: Translations = Translations {
    nav: NavText {
        logo: "ARCHCORP",
        home: "Home",
        about: "About",
        services: "Services",
        projects: "Projects",
        news: "News",
        contact: "Contact",
    },
    hero: HeroText {
        title: "PRECISION   •   INNOVATION   •   TRUST   •   PRECISION   •   INNOVATION   •   TRUST   •   ",
    },
    about: AboutText {
        title: "ABOUT\nUS",
        paragraph1: "Al Osaimi Consulting Office is a trusted partner dedicated to advancing the future of urban development and engineering. Guided by extensive expertise and an ambitious vision, we strive to build stronger connections with our clients while reinforcing our presence in the Kingdom of Saudi Arabia and pursuing continuous expansion beyond its borders.",
        paragraph2: "At Al Osaimi Consulting, we place quality and innovation at the core of everything we do, delivering engineering solutions that exceed standards and meet the aspirations of our clients, affirming our mission to lead in the world of engineering consultancy.",
    },
    services: ServicesText {
        title: "OUR\nSERVICES",
        location: "LOCATION",
        about_label: "ABOUT",
        scroll: "Scroll",
        read_more: "Read More",
        built_on: "Built on a solid foundation of trust and driven by a relentless passion for excellence, we create innovative solutions that contribute to building a sustainable future.",
        intro: "We provide comprehensive architectural and engineering solutions tailored to transform your vision into exceptional built environments. Our services span from conceptual design through project delivery, combining innovative thinking with technical excellence.",
        items: [
            ServiceText {
                id: "architecture",
                title: "ARCHITECTURE",
                description: "Comprehensive architectural design solutions from concept to completion, tailored to your vision and requirements.",
                place: "Global",
                full_description: "Our architectural services encompass masterplanning, schematic design, design development, and construction documentation. We specialize in creating distinctive buildings that balance aesthetics with functionality, sustainability with innovation.",
                image: IMG_ARCHITECTURE,
            },
            ServiceText {
                id: "interior",
                title: "INTERIOR DESIGN",
                description: "Sophisticated interior spaces that reflect your brand identity and enhance user experience through thoughtful design.",
                place: "Multi-location",
                full_description: "From corporate offices to hospitality spaces, we craft interiors that tell your brand story. Our approach integrates spatial planning, material selection, lighting design, and furnishing strategies to create immersive environments.",
                image: IMG_INTERIOR,
            },
            ServiceText {
                id: "urban",
                title: "URBAN PLANNING",
                description: "Strategic urban design and planning services that create sustainable and vibrant communities for the future.",
                place: "Strategic Districts",
                full_description: "We develop comprehensive urban strategies that balance growth with sustainability. Our work includes mixed-use developments, public space design, mobility planning, and community engagement to create thriving urban centers.",
                image: IMG_URBAN,
            },
            ServiceText {
                id: "landscape",
                title: "LANDSCAPE DESIGN",
                description: "Innovative landscape solutions that transform outdoor spaces into functional and beautiful environments.",
                place: "Diverse Locations",
                full_description: "Our landscape design services integrate natural elements with built environments. We create sustainable gardens, parks, and recreational spaces that enhance biodiversity and provide sanctuary for community engagement and ecological restoration.",
                image: IMG_LANDSCAPE,
            },
            ServiceText {
                id: "sustainability",
                title: "SUSTAINABILITY",
                description: "Environmental design strategies and green building solutions for a more sustainable future.",
                place: "Eco-Districts",
                full_description: "We pioneer sustainable design practices including LEED certification, renewable energy integration, water management systems, and carbon-neutral construction. Our commitment to environmental stewardship shapes every project decision.",
                image: IMG_SUSTAINABILITY,
            },
            ServiceText {
                id: "renovation",
                title: "RENOVATION & RETROFIT",
                description: "Strategic restoration and modernization of existing structures with contemporary design and technology.",
                place: "Heritage & Modern Sites",
                full_description: "We specialize in heritage conservation and adaptive reuse projects. Our approach respects historical significance while introducing modern functionality, energy efficiency, and accessibility to extend building life cycles sustainably.",
                image: IMG_RENOVATION,
            },
        ],
    },
    projects: FeaturedProjectText {
        featured: "FEATURED PROJECT",
        title: "CORPORATE HEADQUARTERS",
        year: "2024",
        location: "NEW YORK, USA",
        learn_more: "LEARN MORE",
    },
    projects_gallery: ProjectsGalleryText {
        learn_more: "LEARN MORE",
        description: "This project represents our vision in delivering innovative architectural solutions that combine beauty and functionality. We always strive to achieve the highest standards of quality and sustainability in every project we undertake.",
        items: [
            ProjectItem { title: "AMARA VILLA", category: "RESIDENTIAL", year: "2024", location: "Saudi Arabia" },
            ProjectItem { title: "AURA", category: "RESIDENTIAL", year: "2024", location: "Saudi Arabia" },
            ProjectItem { title: "AZORA", category: "RESIDENTIAL", year: "2024", location: "Saudi Arabia" },
            ProjectItem { title: "ELEVE", category: "RESIDENTIAL", year: "2024", location: "Saudi Arabia" },
            ProjectItem { title: "GHOSOUN RESORT", category: "RESIDENTIAL", year: "2024", location: "Saudi Arabia" },
            ProjectItem { title: "LIORA RESIDENTIAL", category: "RESIDENTIAL", year: "2024", location: "Saudi Arabia" },
            ProjectItem { title: "ORLANA VILLA", category: "RESIDENTIAL", year: "2024", location: "Saudi Arabia" },
            ProjectItem { title: "SQUARE 01", category: "RESIDENTIAL", year: "2024", location: "Saudi Arabia" },
        ],
    },
    news: NewsText {
        title: "NEWS",
        read_more: "Read More.",
        articles: [
            NewsArticle {
                title: "The Future of Architecture",
                subtitle: "Designing for Resilience and Intelligence",
                text: "The architectural industry is undergoing a fundamental shift as design practices increasingly prioritize resilience, sustainability, and intelligent systems. Consultancy firms are now playing a critical role in guiding developers and institutions toward architecture that not only responds to present needs but anticipates future challenges",
                image: IMG_NEWS_FUTURE,
            },
            NewsArticle {
                title: "Sustainable Urban Development",
                subtitle: "Building Tomorrow's Cities Today",
                text: "Our latest initiatives focus on creating sustainable urban environments that balance economic growth with environmental responsibility. Through innovative planning strategies and green building practices, we are helping shape the future of urban living",
                image: IMG_INTERIOR,
            },
            NewsArticle {
                title: "Heritage Conservation Excellence",
                subtitle: "Preserving the Past for Future Generations",
                text: "Al Osaimi Consulting has been recognized for its outstanding work in heritage conservation, blending traditional architectural elements with modern functionality. Our approach ensures that historical significance is preserved while meeting contemporary standards",
                image: IMG_URBAN,
            },
        ],
    },
    contact: ContactText {
        title: "CONTACT\nUS",
        first_name: "FIRST NAME",
        last_name: "LAST NAME",
        email: "EMAIL",
        message: "MESSAGE",
        send: "SEND MESSAGE",
        sent: "Thank you. We will be in touch.",
        missing_fields: "Please fill in every field.",
    },
    language: "EN",
};

static AR: Translations = Translations {
    nav: NavText {
        logo: "آرتشكورب",
        home: "الرئيسية",
        about: "حول",
        services: "الخدمات",
        projects: "المشاريع",
        news: "الأخبار",
        contact: "اتصل",
    },
    hero: HeroText {
        title: "الدقة   •   الابتكار   •   الثقة   •   الدقة   •   الابتكار   •   الثقة   •   ",
    },
    about: AboutText {
        title: "من\nنحن",
        paragraph1: "مكتب العصيمي للاستشارات شريك موثوق مكرس للنهوض بمستقبل التنمية العمرانية والهندسة. مسترشدين بخبرة واسعة ورؤية طموحة، نسعى لبناء روابط أقوى مع عملائنا مع تعزيز حضورنا في المملكة العربية السعودية ومتابعة التوسع المستمر خارج حدودها.",
        paragraph2: "في العصيمي للاستشارات، نضع الجودة والابتكار في صميم كل ما نقوم به، ونقدم حلولاً هندسية تتجاوز المعايير وتلبي تطلعات عملائنا، مؤكدين على مهمتنا في الريادة في عالم الاستشارات الهندسية.",
    },
    services: ServicesText {
        title: "خدماتنا",
        location: "الموقع",
        about_label: "نبذة",
        scroll: "تصفح",
        read_more: "اقرأ المزيد",
        built_on: "بُنيت على أساس متين من الثقة ومدفوعة بشغف لا هوادة فيه للتميز، نعمل على إيجاد حلول مبتكرة تساهم في بناء مستقبل مستدام.",
        intro: "نقدم حلولاً معمارية وهندسية شاملة مصممة خصيصاً لتحويل رؤيتك إلى بيئات مبنية استثنائية. تمتد خدماتنا من التصميم الأولي حتى تسليم المشروع، حيث نجمع بين التفكير المبتكر والتميز التقني.",
        items: [
            ServiceText {
                id: "architecture",
                title: "العمارة",
                description: "حلول تصميم معماري شامل من المفهوم إلى التنفيذ، مصممة خصيصاً لرؤيتك واحتياجاتك.",
                place: "عالمي",
                full_description: "تشمل خدماتنا المعمارية التخطيط الرئيسي والتصميم الأولي وتطوير التصميم والوثائق الإنشائية. نحن متخصصون في إنشاء مباني مميزة توازن بين الجماليات والوظيفة والاستدامة والابتكار.",
                image: IMG_ARCHITECTURE,
            },
            ServiceText {
                id: "interior",
                title: "تصميم الديكور الداخلي",
                description: "مساحات داخلية متطورة تعكس هويتك العلامة التجارية وتعزز تجربة المستخدم من خلال التصميم المدروس.",
                place: "مواقع متعددة",
                full_description: "من المكاتب الشركاتية إلى فضاءات الضيافة، نصنع الديكورات الداخلية التي تروي قصة علامتك التجارية. يدمج نهجنا التخطيط المكاني واختيار المواد وتصميم الإضاءة واستراتيجيات الأثاث لإنشاء بيئات غامرة.",
                image: IMG_INTERIOR,
            },
            ServiceText {
                id: "urban",
                title: "التخطيط الحضري",
                description: "خدمات تصميم وتخطيط حضري استراتيجية تخلق مجتمعات مستدامة وحيوية للمستقبل.",
                place: "الأحياء الاستراتيجية",
                full_description: "نطور استراتيجيات حضرية شاملة توازن بين النمو والاستدامة. يشمل عملنا تطوير الاستخدام المختلط وتصميم الفضاءات العامة والتخطيط الحركي والمشاركة المجتمعية لإنشاء مراكز حضرية مزدهرة.",
                image: IMG_URBAN,
            },
            ServiceText {
                id: "landscape",
                title: "تصميم المناظر الطبيعية",
                description: "حلول مبتكرة للمناظر الطبيعية تحول الأماكن الخارجية إلى بيئات وظيفية وجميلة.",
                place: "مواقع متنوعة",
                full_description: "تدمج خدمات تصميم المناظر الطبيعية لدينا العناصر الطبيعية مع البيئات المبنية. نحن ننشئ حدائق ومنتزهات ومساحات ترفيهية مستدامة تعزز التنوع البيولوجي وتوفر ملاذاً للمشاركة المجتمعية.",
                image: IMG_LANDSCAPE,
            },
            ServiceText {
                id: "sustainability",
                title: "الاستدامة",
                description: "استراتيجيات التصميم البيئي وحلول البناء الأخضر لمستقبل أكثر استدامة.",
                place: "الأحياء الخضراء",
                full_description: "نحن رواد في ممارسات التصميم المستدام بما في ذلك شهادة الريادة في الطاقة والتصميم البيئي وتكامل الطاقة المتجددة. التزامنا بالحفاظ على البيئة يشكل كل قرار في المشروع.",
                image: IMG_SUSTAINABILITY,
            },
            ServiceText {
                id: "renovation",
                title: "الترميم والتحديث",
                description: "استعادة استراتيجية وتحديث للهياكل القائمة بالتصميم المعاصر والتكنولوجيا.",
                place: "المواقع التراثية والحديثة",
                full_description: "نحن متخصصون في مشاريع الحفاظ على التراث وإعادة الاستخدام المكيفة. يحترم نهجنا الأهمية التاريخية مع إدخال الوظيفة الحديثة وكفاءة الطاقة والإمكانية للوصول.",
                image: IMG_RENOVATION,
            },
        ],
    },
    projects: FeaturedProjectText {
        featured: "المشروع المميز",
        title: "مقر الشركة",
        year: "2024",
        location: "نيويورك، الولايات المتحدة",
        learn_more: "اعرف أكثر",
    },
    projects_gallery: ProjectsGalleryText {
        learn_more: "اعرف المزيد",
        description: "هذا المشروع يمثل رؤيتنا في تقديم حلول معمارية مبتكرة تجمع بين الجمال والوظيفة. نسعى دائماً لتحقيق أعلى معايير الجودة والاستدامة في كل مشروع نقوم به.",
        items: [
            ProjectItem { title: "فيلا أمارا", category: "سكني", year: "2024", location: "السعودية" },
            ProjectItem { title: "أورا", category: "سكني", year: "2024", location: "السعودية" },
            ProjectItem { title: "أزورا", category: "سكني", year: "2024", location: "السعودية" },
            ProjectItem { title: "إليف", category: "سكني", year: "2024", location: "السعودية" },
            ProjectItem { title: "منتجع غصون", category: "سكني", year: "2024", location: "السعودية" },
            ProjectItem { title: "ليورا السكني", category: "سكني", year: "2024", location: "السعودية" },
            ProjectItem { title: "فيلا أورلانا", category: "سكني", year: "2024", location: "السعودية" },
            ProjectItem { title: "سكوير ٠١", category: "سكني", year: "2024", location: "السعودية" },
        ],
    },
    news: NewsText {
        title: "الأخبار",
        read_more: "اقرأ المزيد.",
        articles: [
            NewsArticle {
                title: "مستقبل العمارة",
                subtitle: "التصميم من أجل المرونة والذكاء",
                text: "تشهد صناعة العمارة تحولاً جذرياً حيث تعطي ممارسات التصميم الأولوية بشكل متزايد للمرونة والاستدامة والأنظمة الذكية. تلعب الشركات الاستشارية دوراً حاسماً في توجيه المطورين والمؤسسات نحو عمارة لا تستجيب للاحتياجات الحالية فحسب بل تستشرف التحديات المستقبلية",
                image: IMG_NEWS_FUTURE,
            },
            NewsArticle {
                title: "التنمية الحضرية المستدامة",
                subtitle: "بناء مدن الغد اليوم",
                text: "تركز مبادراتنا الأخيرة على إنشاء بيئات حضرية مستدامة توازن بين النمو الاقتصادي والمسؤولية البيئية. من خلال استراتيجيات التخطيط المبتكرة وممارسات البناء الأخضر، نساعد في تشكيل مستقبل الحياة الحضرية",
                image: IMG_INTERIOR,
            },
            NewsArticle {
                title: "التميز في الحفاظ على التراث",
                subtitle: "الحفاظ على الماضي للأجيال القادمة",
                text: "حصل مكتب العصيمي للاستشارات على تقدير لعمله المتميز في الحفاظ على التراث، حيث يمزج العناصر المعمارية التقليدية مع الوظائف الحديثة. يضمن نهجنا الحفاظ على الأهمية التاريخية مع تلبية المعايير المعاصرة",
                image: IMG_URBAN,
            },
        ],
    },
    contact: ContactText {
        title: "اتصل بنا",
        first_name: "الاسم الأول",
        last_name: "الاسم الأخير",
        email: "البريد الإلكتروني",
        message: "الرسالة",
        send: "إرسال الرسالة",
        sent: "شكراً لك. سنتواصل معك قريباً.",
        missing_fields: "يرجى تعبئة جميع الحقول.",
    },
    language: "AR",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes_round_trip() {
        for language in [Language::En, Language::Ar] {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
        assert_eq!(Language::from_code(" AR "), Some(Language::Ar));
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn direction_and_loop_width() {
        assert_eq!(Language::En.dir(), "ltr");
        assert_eq!(Language::Ar.dir(), "rtl");
        assert_eq!(Language::En.banner_loop_width(), 2000.0);
        assert_eq!(Language::Ar.banner_loop_width(), 1200.0);
    }

    #[test]
    fn tables_line_up() {
        let en = translations(Language::En);
        let ar = translations(Language::Ar);

        let en_ids: Vec<_> = en.services.items.iter().map(|s| s.id).collect();
        let ar_ids: Vec<_> = ar.services.items.iter().map(|s| s.id).collect();
        assert_eq!(en_ids, ar_ids);

        for (e, a) in en.news.articles.iter().zip(ar.news.articles.iter()) {
            assert_eq!(e.image, a.image);
        }
        assert_eq!(en.language, "EN");
        assert_eq!(ar.language, "AR");
    }

    #[test]
    fn nav_labels_by_section() {
        let en = translations(Language::En);
        assert_eq!(en.nav.label_for("news"), "News");
        assert_eq!(en.nav.label_for("unknown"), "Home");
    }
}
