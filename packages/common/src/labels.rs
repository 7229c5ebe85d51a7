//! Locale-indexed label table.
//!
//! Every user-facing string of the document (section titles, field captions,
//! activity captions) and every user-facing error message lives here, once
//! per supported locale.

use crate::Locale;

/// User-facing strings for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub app_title: &'static str,
    pub doc_header: &'static str,
    pub prog_unit: &'static str,
    pub situation_number: &'static str,

    pub section_identification: &'static str,
    pub section_curriculum: &'static str,
    pub section_methodology: &'static str,
    pub section_activities: &'static str,
    pub section_evaluation: &'static str,
    pub section_bibliography: &'static str,

    pub title: &'static str,
    pub stage_area: &'static str,
    pub timing: &'static str,
    pub description_goal: &'static str,
    pub links_other_areas: &'static str,
    pub ods_challenges: &'static str,

    pub stage_objectives: &'static str,
    pub key_competencies: &'static str,
    pub specific_competencies: &'static str,
    pub evaluation_criteria: &'static str,
    pub basic_knowledge: &'static str,

    pub method: &'static str,
    pub pedagogical_models: &'static str,
    pub techniques: &'static str,
    pub didactic_strategies: &'static str,

    pub activity: &'static str,
    pub activity_description: &'static str,
    pub activity_sessions: &'static str,
    pub activity_grouping: &'static str,
    pub activity_resources: &'static str,
    pub activity_products: &'static str,
    pub activity_tools: &'static str,

    pub design_eval: &'static str,
    pub implementation_eval: &'static str,
    pub improvement_proposal: &'static str,

    pub watermark: &'static str,

    pub err_stage_missing: &'static str,
    pub err_generate: &'static str,
    pub err_review: &'static str,
    pub err_translate: &'static str,
    pub err_activity: &'static str,
    pub err_extract: &'static str,
    pub err_connection: &'static str,
    pub err_export: &'static str,
    pub err_missing_input: &'static str,
    pub err_no_document: &'static str,
    pub err_unexpected: &'static str,
}

pub const LABELS_ES: Labels = Labels {
    app_title: "Asistente de Situaciones de Aprendizaje",
    doc_header: "Comunidad Foral de Navarra",
    prog_unit: "Unidad de Programación Nº",
    situation_number: "SdA Nº",

    section_identification: "Datos identificativos",
    section_curriculum: "Conexión con los elementos curriculares",
    section_methodology: "Metodología",
    section_activities: "Secuenciación competencial de actividades",
    section_evaluation: "Evaluación de la práctica docente",
    section_bibliography: "Bibliografía y webgrafía",

    title: "Título de la Situación de Aprendizaje",
    stage_area: "Etapa, área, materia o ámbito",
    timing: "Temporalización",
    description_goal: "Descripción y finalidad de los aprendizajes (Justificación)",
    links_other_areas: "Vinculación con otras áreas (Interdisciplinariedad)",
    ods_challenges: "Conexión con ODS y retos s. XXI",

    stage_objectives: "Objetivos de etapa",
    key_competencies: "Descriptores operativos de las competencias clave",
    specific_competencies: "Competencias específicas",
    evaluation_criteria: "Criterios de evaluación",
    basic_knowledge: "Saberes básicos",

    method: "Método",
    pedagogical_models: "Modelos pedagógicos",
    techniques: "Técnicas",
    didactic_strategies: "Estrategias didácticas (DUA)",

    activity: "Actividad",
    activity_description: "Descripción",
    activity_sessions: "Sesiones",
    activity_grouping: "Agrupamiento",
    activity_resources: "Recursos",
    activity_products: "Productos",
    activity_tools: "Instrumentos Eval.",

    design_eval: "Evaluación del diseño",
    implementation_eval: "Evaluación de la implementación",
    improvement_proposal: "Propuesta de mejora",

    watermark: "Documento de trabajo docente",

    err_stage_missing: "Error: Etapa no seleccionada",
    err_generate: "No se pudo generar el contenido. Por favor, inténtalo de nuevo.",
    err_review: "No se pudo completar la revisión. Inténtalo de nuevo.",
    err_translate: "No se pudo completar la traducción.",
    err_activity: "Error al generar la actividad. Inténtalo de nuevo.",
    err_extract: "Error al procesar el archivo. Asegúrate de que es un PDF o imagen válido.",
    err_connection: "Error al conectar con la IA. Verifica tu conexión o la clave API.",
    err_export: "Error al generar el documento de descarga.",
    err_missing_input: "Completa la etapa, el modo, el curso, la materia y el tema.",
    err_no_document: "No hay ningún documento abierto.",
    err_unexpected: "Se ha producido un error. Inténtalo de nuevo.",
};

pub const LABELS_EU: Labels = Labels {
    app_title: "Ikaskuntza Egoeren Laguntzailea",
    doc_header: "Nafarroako Foru Komunitatea",
    prog_unit: "Programazio Unitatea Zk.",
    situation_number: "I.E. Zk.",

    section_identification: "Identifikazio datuak",
    section_curriculum: "Curriculum-elementuekiko lotura",
    section_methodology: "Metodologia",
    section_activities: "Jardueren sekuentziazio konpetentziala",
    section_evaluation: "Irakas-jardunaren ebaluazioa",
    section_bibliography: "Bibliografia eta webgrafia",

    title: "Ikaskuntza Egoeraren Izenburua",
    stage_area: "Etapa, arloa, irakasgaia edo eremua",
    timing: "Tenporalizazioa",
    description_goal: "Ikaskuntzen deskribapena eta helburua (Justifikazioa)",
    links_other_areas: "Beste arlo batzuekiko lotura (Interdisziplinaritatea)",
    ods_challenges: "GJHekiko eta XXI. mendeko erronkekiko lotura",

    stage_objectives: "Etapako helburuak",
    key_competencies: "Funtsezko konpetentzien deskriptore operatiboak",
    specific_competencies: "Konpetentzia espezifikoak",
    evaluation_criteria: "Ebaluazio-irizpideak",
    basic_knowledge: "Oinarrizko jakintzak",

    method: "Metodoa",
    pedagogical_models: "Eredu pedagogikoak",
    techniques: "Teknikak",
    didactic_strategies: "Estrategia didaktikoak (IDU)",

    activity: "Jarduera",
    activity_description: "Deskribapena",
    activity_sessions: "Saioak",
    activity_grouping: "Taldekatzea",
    activity_resources: "Baliabideak",
    activity_products: "Produktuak",
    activity_tools: "Ebal. Tresnak",

    design_eval: "Diseinuaren ebaluazioa",
    implementation_eval: "Inplementazioaren ebaluazioa",
    improvement_proposal: "Hobekuntza-proposamena",

    watermark: "Irakaslearen lan-dokumentua",

    err_stage_missing: "Errorea: Etapa ez da hautatu",
    err_generate: "Ezin izan da edukia sortu. Saiatu berriro, mesedez.",
    err_review: "Ezin izan da berrikuspena osatu. Saiatu berriro.",
    err_translate: "Ezin izan da itzulpena osatu.",
    err_activity: "Errorea jarduera sortzean. Saiatu berriro.",
    err_extract: "Errorea fitxategia prozesatzean. Ziurtatu PDF edo irudi baliozkoa dela.",
    err_connection: "Errorea AArekin konektatzean. Egiaztatu konexioa edo API gakoa.",
    err_export: "Errorea deskarga-dokumentua sortzean.",
    err_missing_input: "Bete etapa, modua, maila, irakasgaia eta gaia.",
    err_no_document: "Ez dago dokumenturik irekita.",
    err_unexpected: "Errore bat gertatu da. Saiatu berriro.",
};

impl Labels {
    pub fn for_locale(locale: Locale) -> &'static Labels {
        match locale {
            Locale::Es => &LABELS_ES,
            Locale::Eu => &LABELS_EU,
        }
    }
}
