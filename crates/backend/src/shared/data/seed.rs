//! Demo catalog data inserted on startup

use chrono::{TimeZone, Utc};
use sea_orm::DatabaseConnection;

use crate::domain::a001_item::{images, questions, repository as items, reviews};
use crate::domain::a002_product::{payment_methods, repository as products};
use crate::domain::a003_seller::repository as sellers;

pub const DEMO_ITEM_ID: &str = "55747713-9cd4-45f7-a4cd-9916ed17a61d";
pub const DEMO_ITEM_TITLE: &str =
    "Samsung Galaxy A55 5G Dual SIM 256 GB Azul Oscuro 8 GB RAM";
pub const DEMO_ITEM_PRICE: i64 = 1_299_900;

const DEMO_PRODUCT_ID: &str = "MCO-PROD-A55";
const DEMO_SELLER_ID: &str = "MCO-SELLER-LINKGAME";

const IMG_BASE: &str = "https://http2.mlstatic.com/D_NQ_NP";

/// Insert the demo item unless it is already present.
///
/// Returns `true` when rows were written.
pub async fn ensure_demo_item(db: &DatabaseConnection) -> anyhow::Result<bool> {
    if items::get_by_id(db, DEMO_ITEM_ID).await?.is_some() {
        tracing::info!("Demo item {} already present", DEMO_ITEM_ID);
        return Ok(false);
    }

    tracing::info!("Seeding demo item {}", DEMO_ITEM_ID);

    sellers::insert(db, &demo_seller()).await?;
    products::insert(db, &demo_product()?).await?;
    for method in demo_payment_methods() {
        payment_methods::insert(db, &method).await?;
    }
    items::insert(db, &demo_item()).await?;
    for image in demo_images() {
        images::insert(db, &image).await?;
    }
    for review in demo_reviews() {
        reviews::insert(db, &review).await?;
    }
    for question in demo_questions() {
        questions::insert(db, &question).await?;
    }

    tracing::info!("Demo item seeded");
    Ok(true)
}

fn demo_seller() -> sellers::Model {
    sellers::Model {
        id: DEMO_SELLER_ID.into(),
        name: "Link Game".into(),
        image_url: format!("{}_2X_612345-MLA0000000001-seller.webp", IMG_BASE),
        number_of_products: 50,
        number_of_sales: 1000,
        number_of_followers: 100,
        general_rating: 4.6,
        attention_description: "Brinda buena atención".into(),
        puntuality_description: "Despacha sus productos a tiempo".into(),
    }
}

fn demo_product() -> anyhow::Result<products::Model> {
    let main_spec = vec![
        products::MainSpecItem {
            item: "Tamaño de la pantalla".into(),
            value: "6.6 \"".into(),
            image_icon_url: "https://http2.mlstatic.com/static/icons/screen.svg".into(),
        },
        products::MainSpecItem {
            item: "Memoria interna".into(),
            value: "256 GB".into(),
            image_icon_url: "https://http2.mlstatic.com/static/icons/memory.svg".into(),
        },
        products::MainSpecItem {
            item: "Cámara trasera principal".into(),
            value: "50 Mpx".into(),
            image_icon_url: "https://http2.mlstatic.com/static/icons/camera.svg".into(),
        },
        products::MainSpecItem {
            item: "Con NFC".into(),
            value: "Sí".into(),
            image_icon_url: "https://http2.mlstatic.com/static/icons/nfc.svg".into(),
        },
        products::MainSpecItem {
            item: "Memoria RAM".into(),
            value: "8 GB".into(),
            image_icon_url: "https://http2.mlstatic.com/static/icons/ram.svg".into(),
        },
    ];

    let group = |item: &str, values: &[(&str, &str)]| products::SecondarySpecItem {
        item: item.into(),
        values: values
            .iter()
            .map(|(k, v)| products::SecondarySpecValue {
                item: (*k).into(),
                value: (*v).into(),
            })
            .collect(),
    };
    let secondary_spec = vec![
        group(
            "Características generales",
            &[("Marca", "Samsung"), ("Línea", "Galaxy A"), ("Modelo", "A55")],
        ),
        group(
            "Pantalla",
            &[("Tipo de pantalla", "Super AMOLED"), ("Resolución", "1080 px x 2340 px")],
        ),
        group("Batería", &[("Capacidad de la batería", "5000 mAh")]),
        group(
            "Conectividad",
            &[("Con Wi-Fi", "Sí"), ("Con Bluetooth", "Sí"), ("Con GPS", "Sí")],
        ),
        group("Sistema operativo", &[("Nombre del sistema operativo", "Android")]),
    ];

    Ok(products::Model {
        id: DEMO_PRODUCT_ID.into(),
        title: "Samsung Galaxy A55".into(),
        model_name: "SM-A556E".into(),
        family_name: "Celulares y Smartphones".into(),
        main_spec: serde_json::to_string(&main_spec)?,
        secondary_spec: serde_json::to_string(&secondary_spec)?,
        rating_value: 4.5,
        rating_count: 5,
    })
}

fn demo_payment_methods() -> Vec<payment_methods::Model> {
    let method = |position: i32, method_type: &str, installments: i32, logo: &str| {
        payment_methods::Model {
            id: format!("{}-pm-{}", DEMO_PRODUCT_ID, position),
            product_id: DEMO_PRODUCT_ID.into(),
            position,
            method_type: method_type.into(),
            installments,
            interest_rate_percentage: 0.0,
            image_url: format!("https://http2.mlstatic.com/storage/logos-api-admin/{}.svg", logo),
        }
    };
    vec![
        method(1, "Tarjetas de crédito", 12, "visa"),
        method(2, "Tarjetas de crédito", 12, "mastercard"),
        method(3, "Tarjetas de crédito", 36, "amex"),
        method(4, "Tarjetas de débito", 0, "visa-debito"),
        method(5, "Efectivo", 0, "efecty"),
    ]
}

fn demo_item() -> items::Model {
    items::Model {
        id: DEMO_ITEM_ID.into(),
        title: DEMO_ITEM_TITLE.into(),
        description: concat!(
            "Con su pantalla Super AMOLED de 6.6\" disfrutarás de colores intensos y gran ",
            "nitidez en cada imagen. Su batería de 5000 mAh te acompaña todo el día y la carga ",
            "rápida de 25 W la recupera en minutos.\n\n",
            "Cámara trasera de 50 Mpx con estabilización óptica para fotos claras incluso de ",
            "noche. Procesador Exynos 1480 de ocho núcleos y 8 GB de RAM para usar varias ",
            "aplicaciones a la vez sin demoras. Resistente al agua y al polvo (IP67)."
        )
        .into(),
        product_status: "Nuevo".into(),
        price: DEMO_ITEM_PRICE,
        available_quantity: 25,
        sold_count: 10,
        product_id: DEMO_PRODUCT_ID.into(),
        seller_id: DEMO_SELLER_ID.into(),
    }
}

fn demo_images() -> Vec<images::Model> {
    ["Vista frontal", "Vista trasera", "Vista lateral", "Cámara", "Caja", "Accesorios", "Colores"]
        .iter()
        .enumerate()
        .map(|(i, alt)| images::Model {
            id: format!("{}-img-{}", DEMO_ITEM_ID, i),
            item_id: DEMO_ITEM_ID.into(),
            position: i as i32,
            alt: (*alt).into(),
            url_small_version: format!("{}_2X_{}-a55-small.webp", IMG_BASE, i),
            url_medium_version: format!("{}_2X_{}-a55-medium.webp", IMG_BASE, i),
        })
        .collect()
}

fn demo_reviews() -> Vec<reviews::Model> {
    let review = |n: u32, rating: i32, content: &str| reviews::Model {
        id: format!("{}-rev-{}", DEMO_ITEM_ID, n),
        item_id: DEMO_ITEM_ID.into(),
        rating,
        content: content.into(),
        created_at: Utc
            .with_ymd_and_hms(2025, 8, n, 10, 0, 0)
            .single()
            .unwrap_or_else(Utc::now),
    };
    vec![
        review(1, 5, "Excelente celular, la batería dura todo el día."),
        review(3, 5, "Muy buena cámara y la pantalla se ve espectacular."),
        review(5, 4, "Buen equipo, aunque se calienta un poco jugando."),
        review(8, 5, "Llegó antes de lo esperado. Recomendado."),
        review(12, 3, "Cumple, pero esperaba mejor rendimiento."),
    ]
}

fn demo_questions() -> Vec<questions::Model> {
    let question = |n: u32, text: &str, answer: &str| questions::Model {
        id: format!("{}-qa-{}", DEMO_ITEM_ID, n),
        item_id: DEMO_ITEM_ID.into(),
        question: text.into(),
        answer: answer.into(),
        created_at: Utc
            .with_ymd_and_hms(2025, 8, n, 9, 0, 0)
            .single()
            .unwrap_or_else(Utc::now),
    };
    vec![
        question(
            20,
            "¿Tiene garantía?",
            "¡Hola! Sí, cuenta con 12 meses de garantía directa con el fabricante. Saludos.",
        ),
        question(
            18,
            "¿Es compatible con todas las operadoras?",
            concat!(
                "¡Hola! Gracias por tu interés. El equipo es liberado de fábrica, por lo que ",
                "funciona con todas las operadoras del país, tanto en prepago como en pospago. ",
                "Es compatible con redes 2G, 3G, 4G LTE y 5G en las bandas utilizadas ",
                "localmente, y admite dos tarjetas SIM físicas o una SIM física junto con una ",
                "eSIM. Te recomendamos verificar con tu operador que tu plan tenga habilitado ",
                "el servicio 5G y que tu zona cuente con cobertura. Si tienes alguna duda ",
                "adicional sobre la configuración de APN o la activación de la eSIM, con gusto ",
                "te ayudamos después de la compra por el chat de mensajería. ¡Quedamos atentos ",
                "a cualquier otra pregunta que tengas! Saludos del equipo de Link Game."
            ),
        ),
        question(15, "¿Incluye cargador?", "¡Hola! Incluye cable USB-C, el cargador se vende por separado."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db;

    #[tokio::test]
    async fn test_seed_runs_once() {
        let conn = db::connect_in_memory().await.unwrap();
        assert!(ensure_demo_item(&conn).await.unwrap());
        assert!(!ensure_demo_item(&conn).await.unwrap());
    }

    #[test]
    fn test_demo_texts_exercise_truncation() {
        assert!(demo_item().description.chars().count() > 300);
        assert!(demo_questions()
            .iter()
            .any(|q| q.answer.chars().count() > 500));
        assert!(demo_images().len() > 6);
    }
}
