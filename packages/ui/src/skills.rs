/// The catalogue offered by the skill pickers: the freelancer signup step,
/// the profile editor, and the client's required-skills selector.
pub const SKILLS: [&str; 21] = [
    "Développement Web",
    "Développement Mobile",
    "Design Graphique",
    "Rédaction",
    "Marketing Digital",
    "SEO",
    "Data Science",
    "Gestion de Projet",
    "Réseaux Sociaux",
    "Développement de Logiciels",
    "Intelligence Artificielle",
    "Test et Assurance Qualité",
    "Administration Système",
    "Gestion de Base de Données",
    "Analyse de Données",
    "UX/UI Design",
    "Photographie",
    "Vidéo et Montage",
    "Formation et Coaching",
    "Consultation",
    "Support Technique",
];
