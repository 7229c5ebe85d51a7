//! Response schemas declared to the provider.
//!
//! Every document field is required so the provider always returns the full
//! shape. Field descriptions are written in the target language, which
//! nudges the provider to answer in it.

use ikasnova_common::Locale;
use ikasnova_model::{ActivityField, ListField, TextField};
use serde_json::{json, Map, Value};

fn string_prop(description: &str) -> Value {
    json!({ "type": "STRING", "description": description })
}

fn localized(locale: Locale, es: &'static str, eu: &'static str) -> &'static str {
    match locale {
        Locale::Es => es,
        Locale::Eu => eu,
    }
}

fn text_description(field: TextField, locale: Locale) -> &'static str {
    match field {
        TextField::ProgUnitNumber => localized(locale, "Número de unidad", "Unitate zenbakia"),
        TextField::SituationNumber => localized(locale, "Número de situación", "I.E. zenbakia"),
        TextField::Title => localized(locale, "Título de la SdA", "Izenburua EUSKARAZ"),
        TextField::StageArea => localized(locale, "Etapa, curso y área", "Etapa, maila eta arloa EUSKARAZ"),
        TextField::LinksOtherAreas => {
            localized(locale, "Vinculación con otras áreas", "Beste arloekiko lotura EUSKARAZ")
        }
        TextField::DescriptionGoal => {
            localized(locale, "Descripción y finalidad", "Justifikazioa eta helburua EUSKARAZ")
        }
        TextField::OdsChallenges => localized(locale, "ODS y Retos s.XXI", "GJH eta erronkak EUSKARAZ"),
        TextField::TimingRelation => localized(locale, "Temporalización", "Tenporalizazioa"),
        TextField::Method => localized(locale, "Metodología", "Metodologia EUSKARAZ"),
        TextField::PedagogicalModels => {
            localized(locale, "Modelos pedagógicos", "Eredu pedagogikoak EUSKARAZ")
        }
        TextField::Techniques => localized(locale, "Técnicas didácticas", "Teknika didaktikoak EUSKARAZ"),
        TextField::DidacticStrategies => {
            localized(locale, "Estrategias DUA", "Arreta aniztasunari (IDU) EUSKARAZ")
        }
        TextField::DesignEval => localized(locale, "Evaluación del diseño", "Diseinuaren ebaluazioa EUSKARAZ"),
        TextField::ImplementationEval => localized(
            locale,
            "Evaluación de la implementación",
            "Inplementazioaren ebaluazioa EUSKARAZ",
        ),
        TextField::ImprovementProposal => {
            localized(locale, "Propuesta de mejora", "Hobekuntza proposamena EUSKARAZ")
        }
        TextField::Bibliography => localized(locale, "Bibliografía", "Bibliografia"),
    }
}

fn list_description(field: ListField, locale: Locale) -> &'static str {
    match field {
        ListField::StageObjectives => localized(
            locale,
            "Objetivos de etapa del currículo de Navarra",
            "Nafarroako curriculumeko etapako helburuak EUSKARAZ",
        ),
        ListField::KeyCompetenciesDescriptors => localized(
            locale,
            "Descriptores operativos (ej: CCL1)",
            "Funtsezko konpetentzien deskriptoreak (adib: CCL1)",
        ),
        ListField::SpecificCompetencies => localized(
            locale,
            "Competencias específicas (Decreto Foral)",
            "Konpetentzia espezifikoak (Nafarroako dekretua) EUSKARAZ",
        ),
        ListField::EvaluationCriteria => localized(
            locale,
            "Criterios de evaluación oficiales",
            "Ebaluazio-irizpide ofizialak EUSKARAZ",
        ),
        ListField::BasicKnowledge => localized(
            locale,
            "Saberes básicos (contenidos)",
            "Oinarrizko jakintzak (edukiak) EUSKARAZ",
        ),
    }
}

fn activity_description(field: ActivityField, locale: Locale) -> &'static str {
    match field {
        ActivityField::Description => localized(
            locale,
            "Descripción detallada de la actividad",
            "Jardueraren deskribapena EUSKARAZ",
        ),
        ActivityField::Sessions => localized(locale, "Número de sesiones", "Saio kopurua"),
        ActivityField::Grouping => localized(
            locale,
            "Tipo de agrupamiento (individual, parejas, pequeño grupo...)",
            "Taldekatze mota (bakarka, binaka, talde txikia...)",
        ),
        ActivityField::Resources => localized(locale, "Recursos necesarios", "Beharrezko baliabideak EUSKARAZ"),
        ActivityField::EvaluableProducts => {
            localized(locale, "Productos entregables", "Produktu ebaluagarriak EUSKARAZ")
        }
        ActivityField::EvalTools => localized(locale, "Instrumentos de evaluación", "Ebaluazio tresnak EUSKARAZ"),
    }
}

fn required(names: impl IntoIterator<Item = &'static str>) -> Value {
    Value::Array(names.into_iter().map(|n| Value::String(n.to_string())).collect())
}

/// Schema of one activity. Without a locale the fields carry no descriptions.
pub fn activity_schema(locale: Option<Locale>) -> Value {
    let mut properties = Map::new();
    for field in ActivityField::ALL {
        let prop = match locale {
            Some(locale) => string_prop(activity_description(field, locale)),
            None => json!({ "type": "STRING" }),
        };
        properties.insert(field.json_name().to_string(), prop);
    }

    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": required(ActivityField::ALL.map(ActivityField::json_name)),
    })
}

/// Schema of a full document with descriptions in `locale`
pub fn document_schema(locale: Locale) -> Value {
    let mut properties = Map::new();

    for field in TextField::ALL {
        properties.insert(
            field.json_name().to_string(),
            string_prop(text_description(field, locale)),
        );
    }

    for field in ListField::ALL {
        properties.insert(
            field.json_name().to_string(),
            json!({
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": list_description(field, locale),
            }),
        );
    }

    properties.insert(
        "activities".to_string(),
        json!({
            "type": "ARRAY",
            "items": activity_schema(Some(locale)),
            "description": localized(
                locale,
                "Secuencia de 3 a 5 actividades",
                "3-5 jarduerako sekuentzia EUSKARAZ",
            ),
        }),
    );

    let names = TextField::ALL
        .map(TextField::json_name)
        .into_iter()
        .chain(ListField::ALL.map(ListField::json_name))
        .chain(std::iter::once("activities"));

    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": required(names),
    })
}
