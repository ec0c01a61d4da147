// Hand-translated page copy. The Spanish variant is a separate copy of the
// English one, not generated from it.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Locale {
    En,
    Es,
}

impl Locale {
    pub fn copy(self) -> &'static LandingCopy {
        match self {
            Locale::En => &ENGLISH,
            Locale::Es => &SPANISH,
        }
    }

    pub fn lang(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }
}

/// Messages the contact pipeline shows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FormMessages {
    pub sending: &'static str,
    pub invalid: &'static str,
    pub thank_you: &'static str,
    pub send_timeout: &'static str,
    pub send_rejected: &'static str,
    pub send_offline: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct ServiceCopy {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct StatCopy {
    pub target: i64,
    pub suffix: &'static str,
    pub label: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct FeatureCopy {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct LandingCopy {
    pub nav_services: &'static str,
    pub nav_why_us: &'static str,
    pub nav_contact: &'static str,
    pub nav_call: &'static str,
    pub nav_other_language: &'static str,

    pub hero_badge: &'static str,
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub hero_call: &'static str,
    pub hero_contact: &'static str,
    pub hero_image_alt: &'static str,

    pub services_title: &'static str,
    pub services_intro: &'static str,
    pub services: &'static [ServiceCopy],

    pub why_title: &'static str,
    pub stats: &'static [StatCopy],
    pub features: &'static [FeatureCopy],

    pub contact_title: &'static str,
    pub contact_intro: &'static str,
    pub info_cards: &'static [FeatureCopy],
    pub label_name: &'static str,
    pub label_email: &'static str,
    pub label_pet: &'static str,
    pub label_message: &'static str,
    pub submit: &'static str,
    pub form_messages: FormMessages,

    pub shortcuts_hint: &'static str,
    pub footer_tagline: &'static str,
    pub footer_notice: &'static str,
}

static ENGLISH: LandingCopy = LandingCopy {
    nav_services: "Services",
    nav_why_us: "Why Us",
    nav_contact: "Contact",
    nav_call: "Call 24/7",
    nav_other_language: "Español",

    hero_badge: "Open 24 hours, 365 days",
    hero_title: "Emergency care for your pet, when every minute counts",
    hero_subtitle: "Board-certified emergency veterinarians, on-site diagnostics and intensive care, ready day and night.",
    hero_call: "Call the emergency line",
    hero_contact: "Send us a message",
    hero_image_alt: "Veterinarian examining a dog",

    services_title: "Our Services",
    services_intro: "Everything your pet needs in an emergency, under one roof.",
    services: &[
        ServiceCopy {
            icon: "🚑",
            title: "24/7 Emergency Care",
            body: "Walk in at any hour. Critical patients are triaged and treated immediately.",
        },
        ServiceCopy {
            icon: "🩺",
            title: "Intensive Care",
            body: "Round-the-clock monitoring for pets recovering from trauma or surgery.",
        },
        ServiceCopy {
            icon: "🔬",
            title: "In-House Diagnostics",
            body: "Digital X-ray, ultrasound and a full laboratory for results in minutes.",
        },
        ServiceCopy {
            icon: "🏥",
            title: "Emergency Surgery",
            body: "Fully equipped operating rooms and an experienced surgical team.",
        },
        ServiceCopy {
            icon: "☠️",
            title: "Toxin Exposure",
            body: "Fast decontamination and treatment for poisoning and ingestions.",
        },
        ServiceCopy {
            icon: "🐾",
            title: "Follow-Up Care",
            body: "We coordinate with your regular vet so recovery continues at home.",
        },
    ],

    why_title: "Why Choose Salva Clients",
    stats: &[
        StatCopy { target: 15, suffix: "+", label: "Years of emergency experience" },
        StatCopy { target: 12000, suffix: "+", label: "Pets treated" },
        StatCopy { target: 24, suffix: "/7", label: "Availability" },
        StatCopy { target: 98, suffix: "%", label: "Client satisfaction" },
    ],
    features: &[
        FeatureCopy {
            title: "No appointment needed",
            body: "Emergencies don't wait, and neither do we.",
        },
        FeatureCopy {
            title: "Specialist team",
            body: "Emergency and critical care specialists on every shift.",
        },
        FeatureCopy {
            title: "Clear communication",
            body: "Regular updates and transparent estimates before treatment.",
        },
    ],

    contact_title: "Contact Us",
    contact_intro: "For emergencies call us right away. For everything else, leave a message and we will get back to you.",
    info_cards: &[
        FeatureCopy {
            title: "Emergency line",
            body: "+1 (234) 567-8900",
        },
        FeatureCopy {
            title: "Address",
            body: "1200 Harbor Avenue, Suite 4",
        },
        FeatureCopy {
            title: "Hours",
            body: "Always open, including holidays",
        },
    ],
    label_name: "Your name",
    label_email: "Email",
    label_pet: "Pet's name",
    label_message: "How can we help?",
    submit: "Send Message",
    form_messages: FormMessages {
        sending: "Sending...",
        invalid: "Please fill in all fields correctly",
        thank_you: "Thank you! We'll contact you within 1 hour.",
        send_timeout: "The request timed out. Please try again.",
        send_rejected: "We couldn't accept your message right now. Please call us instead.",
        send_offline: "You appear to be offline. Check your connection and try again.",
    },

    shortcuts_hint: "Tip: press E to call us, C to jump to the contact form.",
    footer_tagline: "Professional Veterinary Emergency Services",
    footer_notice: "© 2026 Salva Clients. All rights reserved.",
};

static SPANISH: LandingCopy = LandingCopy {
    nav_services: "Servicios",
    nav_why_us: "Por qué nosotros",
    nav_contact: "Contacto",
    nav_call: "Llamar 24/7",
    nav_other_language: "English",

    hero_badge: "Abierto 24 horas, 365 días",
    hero_title: "Urgencias para tu mascota, cuando cada minuto cuenta",
    hero_subtitle: "Veterinarios especialistas en urgencias, diagnóstico en el centro y cuidados intensivos, listos día y noche.",
    hero_call: "Llamar a urgencias",
    hero_contact: "Envíanos un mensaje",
    hero_image_alt: "Veterinaria examinando a un perro",

    services_title: "Nuestros Servicios",
    services_intro: "Todo lo que tu mascota necesita en una urgencia, en un solo lugar.",
    services: &[
        ServiceCopy {
            icon: "🚑",
            title: "Urgencias 24/7",
            body: "Ven a cualquier hora. Los pacientes críticos se atienden de inmediato.",
        },
        ServiceCopy {
            icon: "🩺",
            title: "Cuidados Intensivos",
            body: "Vigilancia continua para mascotas que se recuperan de traumas o cirugías.",
        },
        ServiceCopy {
            icon: "🔬",
            title: "Diagnóstico Propio",
            body: "Rayos X digitales, ecografía y laboratorio completo con resultados en minutos.",
        },
        ServiceCopy {
            icon: "🏥",
            title: "Cirugía de Urgencia",
            body: "Quirófanos totalmente equipados y un equipo quirúrgico con experiencia.",
        },
        ServiceCopy {
            icon: "☠️",
            title: "Intoxicaciones",
            body: "Descontaminación y tratamiento rápidos ante envenenamientos e ingestas.",
        },
        ServiceCopy {
            icon: "🐾",
            title: "Seguimiento",
            body: "Coordinamos con tu veterinario habitual para que la recuperación siga en casa.",
        },
    ],

    why_title: "Por qué elegir Salva Clients",
    stats: &[
        StatCopy { target: 15, suffix: "+", label: "Años de experiencia en urgencias" },
        StatCopy { target: 12000, suffix: "+", label: "Mascotas atendidas" },
        StatCopy { target: 24, suffix: "/7", label: "Disponibilidad" },
        StatCopy { target: 98, suffix: "%", label: "Clientes satisfechos" },
    ],
    features: &[
        FeatureCopy {
            title: "Sin cita previa",
            body: "Las urgencias no esperan, y nosotros tampoco.",
        },
        FeatureCopy {
            title: "Equipo especializado",
            body: "Especialistas en urgencias y cuidados críticos en cada turno.",
        },
        FeatureCopy {
            title: "Comunicación clara",
            body: "Te informamos con frecuencia y con presupuestos transparentes.",
        },
    ],

    contact_title: "Contáctanos",
    contact_intro: "Para urgencias, llámanos de inmediato. Para todo lo demás, déjanos un mensaje y te responderemos.",
    info_cards: &[
        FeatureCopy {
            title: "Línea de urgencias",
            body: "+1 (234) 567-8900",
        },
        FeatureCopy {
            title: "Dirección",
            body: "1200 Harbor Avenue, Suite 4",
        },
        FeatureCopy {
            title: "Horario",
            body: "Siempre abierto, también en festivos",
        },
    ],
    label_name: "Tu nombre",
    label_email: "Correo electrónico",
    label_pet: "Nombre de tu mascota",
    label_message: "¿Cómo podemos ayudarte?",
    submit: "Enviar Mensaje",
    form_messages: FormMessages {
        sending: "Enviando...",
        invalid: "Por favor, completa todos los campos correctamente",
        thank_you: "¡Gracias! Te contactaremos en menos de 1 hora.",
        send_timeout: "La solicitud tardó demasiado. Inténtalo de nuevo.",
        send_rejected: "No pudimos recibir tu mensaje ahora. Por favor, llámanos.",
        send_offline: "Parece que no tienes conexión. Revísala e inténtalo de nuevo.",
    },

    shortcuts_hint: "Consejo: pulsa E para llamarnos y C para ir al formulario.",
    footer_tagline: "Servicios Veterinarios de Urgencia Profesionales",
    footer_notice: "© 2026 Salva Clients. Todos los derechos reservados.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_variants_carry_the_footer_year_placeholder() {
        for locale in [Locale::En, Locale::Es] {
            assert!(locale.copy().footer_notice.contains("2026"));
        }
    }

    #[test]
    fn variants_have_matching_sections() {
        let en = Locale::En.copy();
        let es = Locale::Es.copy();
        assert_eq!(en.services.len(), es.services.len());
        assert_eq!(en.stats.len(), es.stats.len());
        assert_eq!(en.features.len(), es.features.len());
        assert_eq!(en.info_cards.len(), es.info_cards.len());
        for (a, b) in en.stats.iter().zip(es.stats) {
            assert_eq!(a.target, b.target);
        }
    }

    #[test]
    fn form_messages_are_translated() {
        assert_ne!(
            Locale::En.copy().form_messages.invalid,
            Locale::Es.copy().form_messages.invalid
        );
    }
}
