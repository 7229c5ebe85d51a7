//! Instructions and prompts sent with each provider action.
//!
//! Every action has a system instruction that sets the provider's role and
//! rules, a user prompt carrying the inputs, and a sampling temperature.

use crate::traits::{GenerateRequest, ProviderError};
use ikasnova_common::{EducationalStage, Locale};
use ikasnova_model::LearningSituation;

pub const GENERATE_TEMPERATURE: f32 = 0.7;
pub const REVIEW_TEMPERATURE: f32 = 0.3;
pub const TRANSLATE_TEMPERATURE: f32 = 0.1;
pub const ACTIVITY_TEMPERATURE: f32 = 0.7;
pub const EXTRACT_TEMPERATURE: f32 = 0.4;

/// Fully built prompt for one action
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
    pub temperature: f32,
}

fn encode(document: &LearningSituation) -> Result<String, ProviderError> {
    serde_json::to_string(document).map_err(|e| ProviderError::Encode(e.to_string()))
}

pub fn generate(request: &GenerateRequest) -> Prompt {
    let stage = request.stage.name();
    let notes = request
        .extra_notes
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty());

    let (system, user) = match request.locale {
        Locale::Es => {
            let system = format!(
                "Actúa como un asesor pedagógico experto en el currículo oficial de Navarra (LOMLOE) para la etapa {stage}.\n\n\
                 TU MISIÓN:\n\
                 Crear DESDE CERO una Situación de Aprendizaje COMPLETA para el tema proporcionado.\n\n\
                 REGLAS ESTRICTAS:\n\
                 1. IDIOMA: Todo el contenido debe estar en CASTELLANO.\n\
                 2. NORMATIVA: Usa las Competencias Específicas y Criterios de Evaluación literales del Decreto Foral de Navarra.\n\
                 3. CREATIVIDAD: Propón actividades innovadoras, secuenciadas y atractivas."
            );
            let extra = notes
                .map(|n| {
                    format!(
                        "\n\nREQUISITOS ADICIONALES (Importante): El usuario ha solicitado específicamente trabajar estas competencias, criterios o saberes: \"{n}\". \
                         Asegúrate de que las actividades y los elementos curriculares se alineen con esto."
                    )
                })
                .unwrap_or_default();
            let user = format!(
                "Genera una Situación de Aprendizaje completa para:\n\
                 - Curso: {}\n\
                 - Asignatura: {}\n\
                 - Tema/Contexto: {}{extra}\n\n\
                 Rellena TODOS los campos del JSON con rigor curricular y calidad didáctica.",
                request.grade, request.subject, request.topic
            );
            (system, user)
        }
        Locale::Eu => {
            let system = format!(
                "Jardun ezazu Nafarroako Curriculumean (LOMLOE) aditua den aholkulari pedagogiko gisa ({stage} etapa).\n\n\
                 ZURE EGINKIZUNA:\n\
                 Sortu HUTSETIK Ikaskuntza Egoera OSOA emandako gaiarentzat.\n\n\
                 ARAUAK:\n\
                 1. HIZKUNTZA: Irteera GUZTIA EUSKARAZ izan behar da.\n\
                 2. ARAUDIA: Erabili Nafarroako Dekretu Ofizialeko Konpetentzia Espezifikoak eta Ebaluazio Irizpideak hitzez hitz.\n\
                 3. SORMENA: Proposatu jarduera berritzaileak eta motibagarriak."
            );
            let extra = notes
                .map(|n| {
                    format!(
                        "\n\nBALDINTZA GEHIGARRIAK (Garrantzitsua): Erabiltzaileak konpetentzia edo eduki hauetan zentratzea eskatu du: \"{n}\". \
                         Ziurtatu jarduerak eta lotura curricularrak honekin bat datozela."
                    )
                })
                .unwrap_or_default();
            let user = format!(
                "Sortu Ikaskuntza Egoera hau:\n\
                 - Maila: {}\n\
                 - Arloa: {}\n\
                 - Gaia/Testuingurua: {}{extra}\n\n\
                 Bete eremu guztiak (JSON) zehaztasun handiz.",
                request.grade, request.subject, request.topic
            );
            (system, user)
        }
    };

    Prompt {
        system,
        user,
        temperature: GENERATE_TEMPERATURE,
    }
}

pub fn review(
    document: &LearningSituation,
    stage: EducationalStage,
    locale: Locale,
) -> Result<Prompt, ProviderError> {
    let stage = stage.name();
    let json = encode(document)?;

    let (system, user) = match locale {
        Locale::Es => (
            format!(
                "Actúa como un inspector y asesor pedagógico experto en el currículo oficial de Navarra (LOMLOE) para la etapa {stage}.\n\n\
                 TU MISIÓN:\n\
                 Revisar la Situación de Aprendizaje (JSON) proporcionada.\n\n\
                 IMPORTANTE:\n\
                 1. Si el docente ya ha escrito contenido en un campo, RESPETA su idea. Tu trabajo es pulir, mejorar la redacción académica y asegurar la precisión normativa, NO reescribir la historia si no es necesario.\n\
                 2. Si el campo está VACÍO, rellénalo con contenido experto y coherente con el resto.\n\n\
                 REGLAS ESTRICTAS:\n\
                 1. IDIOMA: Todo el contenido debe estar en CASTELLANO.\n\
                 2. NORMATIVA: Asegúrate de que las Competencias Específicas y Criterios de Evaluación sean literales del Decreto Foral."
            ),
            format!(
                "Aquí tienes el borrador redactado por el docente en formato JSON.\n\
                 Por favor, analiza el contenido. Rellena los huecos vacíos y sugiere mejoras gramaticales o técnicas para los huecos ya rellenos (respetando la intención original del docente).\n\n\
                 JSON DE ENTRADA:\n{json}"
            ),
        ),
        Locale::Eu => (
            format!(
                "Jardun ezazu Nafarroako Curriculumean (LOMLOE) aditua den ikuskari eta aholkulari pedagogiko gisa ({stage} etapa).\n\n\
                 ZURE EGINKIZUNA:\n\
                 Emandako Ikaskuntza Egoera (JSON) berrikusi.\n\n\
                 GARRANTZITSUA:\n\
                 1. Irakasleak jada testua idatzi badu, ERRESPETATU bere ideia nagusia. Soilik hobetu ortografia, estiloa edo zehaztasun teknikoa. Ez aldatu esanahia guztiz.\n\
                 2. Eremua hutsik badago, bete ezazu kalitatezko edukiarekin.\n\n\
                 ARAUAK:\n\
                 1. HIZKUNTZA: Irteera JSONeko balio GUZTIAK EUSKARAZ egon behar dira.\n\
                 2. ARAUDIA: Ziurtatu Konpetentzia Espezifikoak eta Ebaluazio Irizpideak Nafarroako Dekretu Ofizialekoak direla."
            ),
            format!(
                "Hona hemen irakasleak idatzitako zirriborroa JSON formatuan.\n\
                 Mesedez, aztertu edukia. Hutsik daudenak bete, eta beteak daudenak hobetu (irakaslearen jatorrizkoa errespetatuz).\n\n\
                 JSON SARRERA:\n{json}"
            ),
        ),
    };

    Ok(Prompt {
        system,
        user,
        temperature: REVIEW_TEMPERATURE,
    })
}

/// The instruction is always in Spanish; only the target language changes.
pub fn translate(document: &LearningSituation, target: Locale) -> Result<Prompt, ProviderError> {
    let language = target.language_name();
    let json = encode(document)?;

    let system = format!(
        "Actúa como un traductor experto en el ámbito educativo de Navarra (LOMLOE).\n\n\
         TU MISIÓN:\n\
         Traducir ÍNTEGRAMENTE el contenido del archivo JSON proporcionado al idioma: {language}.\n\n\
         REGLAS CRÍTICAS:\n\
         1. NO cambies la estructura del JSON ni las claves.\n\
         2. Traduce TODOS los valores de texto.\n\
         3. Para términos técnicos curriculares (Saberes básicos, Criterios de evaluación, etc.), USA LA TERMINOLOGÍA OFICIAL del Decreto Foral de Navarra en {language}.\n\
         4. Si el valor original es un número (ej: \"3\"), mantenlo.\n\
         5. Mantén el tono formal y académico."
    );
    let user = format!("Traduce el siguiente JSON al {language}:\n\n{json}");

    Ok(Prompt {
        system,
        user,
        temperature: TRANSLATE_TEMPERATURE,
    })
}

pub fn activity(idea: &str, context: &LearningSituation, locale: Locale) -> Prompt {
    let (system, user) = match locale {
        Locale::Es => (
            "Eres un diseñador experto de actividades pedagógicas.\n\
             A partir de la idea del usuario, desarrolla una ficha de actividad completa (descripción, sesiones, evaluación...).\n\
             Asegúrate de que encaje con el contexto de la Situación de Aprendizaje. Salida en CASTELLANO."
                .to_string(),
            format!(
                "Contexto (Situación de Aprendizaje):\n\
                 - Título: {}\n\
                 - Nivel/Área: {}\n\n\
                 PETICIÓN DEL USUARIO (Nueva actividad sobre):\n\"{idea}\"\n\n\
                 Genera la actividad en formato JSON (estructura Activity).",
                context.title, context.stage_area
            ),
        ),
        Locale::Eu => (
            "Jarduera pedagogikoen diseinatzaile aditua zara.\n\
             Erabiltzaileak emandako ideiatik abiatuta, garatu jarduera oso bat (deskribapena, saioak, ebaluazioa...).\n\
             Ziurtatu Ikaskuntza Egoeraren testuinguruarekin bat datorrela. Irteera EUSKARAZ."
                .to_string(),
            format!(
                "Testuingurua (Ikaskuntza Egoera):\n\
                 - Izenburua: {}\n\
                 - Maila/Arloa: {}\n\n\
                 ERABILTZAILEAREN ESKAERA (Jarduera berria honi buruz):\n\"{idea}\"\n\n\
                 Sortu jarduera JSON formatuan (Activity egitura).",
                context.title, context.stage_area
            ),
        ),
    };

    Prompt {
        system,
        user,
        temperature: ACTIVITY_TEMPERATURE,
    }
}

/// Accompanies the inline file payload
pub fn extract(locale: Locale, stage: EducationalStage) -> Prompt {
    let stage = stage.name();
    let language = locale.language_name();

    let (system, user) = match locale {
        Locale::Es => (
            format!(
                "Tu misión es extraer los datos de esta Situación de Aprendizaje (imagen o PDF) y estructurarlos en el formato JSON requerido.\n\n\
                 IMPORTANTE:\n\
                 1. ADAPTA el contenido a la normativa del currículo oficial de la Comunidad Foral de Navarra (LOMLOE) para la etapa: {stage}.\n\
                 2. Usa la terminología oficial (Saberes básicos, Competencias específicas, Criterios de evaluación...).\n\
                 3. Si el documento original tiene una estructura antigua o diferente, REFORMULA y REUBICA el contenido para que encaje perfectamente en las celdas de este esquema oficial.\n\
                 4. Traduce todo al {language}."
            ),
            "Analiza el documento, adapta el contenido al currículo de Navarra y rellena el JSON.".to_string(),
        ),
        Locale::Eu => (
            format!(
                "Zure zeregina da irudi edo PDF honetatik Ikaskuntza Egoera baten datuak ateratzea eta JSON formatuan egituratzea.\n\n\
                 GARRANTZITSUA:\n\
                 1. Egokitu edukia Nafarroako Foru Komunitateko curriculum ofizialera ({stage} etapa).\n\
                 2. Erabili LOMLOE terminologia ofiziala (Oinarrizko jakintzak, Konpetentzia espezifikoak, Ebaluazio irizpideak...).\n\
                 3. Jatorrizko dokumentuak beste formatu bat badu, eraldatu edukiak txantiloi honetako gelaxketara egokitzeko.\n\
                 4. Irteera {language}z izan behar da."
            ),
            "Aztertu dokumentua, egokitu Nafarroako curriculumera eta bete JSON fitxategia.".to_string(),
        ),
    };

    Prompt {
        system,
        user,
        temperature: EXTRACT_TEMPERATURE,
    }
}
