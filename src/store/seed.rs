//! Built-in indicator set
//!
//! Eleven records covering the August–October 2025 releases. Trends are
//! published figures, not derived from the series.

use super::types::{EconomicIndicator, IndicatorId};

/// The indicators the server starts with, in display order
pub fn default_indicators() -> Vec<EconomicIndicator> {
    vec![
        EconomicIndicator::new(
            IndicatorId::Inflacion.as_str(),
            "Inflación (IPC mensual)",
            "El índice de precios al consumidor (IPC) mide la variación de precios de los bienes y servicios representativos del gasto de consumo de los hogares.",
        )
        .unit("%")
        .trend(-0.8)
        .point("2025-08-01", 4.2)
        .point("2025-09-01", 3.5)
        .point("2025-10-01", 2.7),
        EconomicIndicator::new(
            IndicatorId::CanastaBasica.as_str(),
            "Canasta Básica Total",
            "La Canasta Básica Total establece el ingreso que un hogar tipo debe tener para satisfacer, por medio de la compra de bienes y servicios no alimentarios (vestimenta, educación, salud, etc.), un conjunto de necesidades consideradas esenciales.",
        )
        .unit("$")
        .trend(5.3)
        .point("2025-08-01", 850000.0)
        .point("2025-09-01", 892000.0)
        .point("2025-10-01", 935000.0),
        EconomicIndicator::new(
            IndicatorId::Emae.as_str(),
            "EMAE",
            "El Estimador Mensual de Actividad Económica (EMAE) refleja la evolución mensual de la actividad económica del conjunto de los sectores productivos a nivel nacional.",
        )
        .unit("índice")
        .trend(1.2)
        .point("2025-08-01", 125.4)
        .point("2025-09-01", 126.8)
        .point("2025-10-01", 128.2),
        EconomicIndicator::new(
            IndicatorId::Icc.as_str(),
            "Índice de Confianza del Consumidor",
            "El índice se confecciona con datos recolectados en una encuesta mensual sobre la situación económica personal y de la economía en general, con una muestra representativa.",
        )
        .unit("puntos")
        .trend(-2.1)
        .point("2025-08-01", 45.2)
        .point("2025-09-01", 44.1)
        .point("2025-10-01", 43.5),
        EconomicIndicator::new(
            IndicatorId::Desempleo.as_str(),
            "Tasa de Desocupación",
            "Presenta información sobre el comportamiento del mercado de trabajo, midiendo el porcentaje de la población económicamente activa que se encuentra sin empleo.",
        )
        .unit("%")
        .trend(-0.3)
        .point("2025-08-01", 7.8)
        .point("2025-09-01", 7.6)
        .point("2025-10-01", 7.3),
        EconomicIndicator::new(
            IndicatorId::Reservas.as_str(),
            "Reservas USD",
            "Reservas internacionales en dólares estadounidenses del Banco Central de la República Argentina. Estas reservas incluyen oro, divisas extranjeras y otros activos de liquidez internacional.",
        )
        .unit("M USD")
        .trend(3.5)
        .point("2025-08-01", 28500.0)
        .point("2025-09-01", 29200.0)
        .point("2025-10-01", 30100.0),
        EconomicIndicator::new(
            IndicatorId::VentasSupermercados.as_str(),
            "Ventas en Supermercados",
            "Mide la evolución de las ventas a los consumidores finales en supermercados a precios corrientes. Es un indicador clave del consumo privado y la actividad económica interna.",
        )
        .unit("var. %")
        .trend(2.8)
        .point("2025-08-01", -1.2)
        .point("2025-09-01", 0.5)
        .point("2025-10-01", 2.1),
        EconomicIndicator::new(
            IndicatorId::ResultadosFiscales.as_str(),
            "Resultado Fiscal Primario",
            "El resultado fiscal primario muestra el balance de ingresos y gastos del sector público nacional antes del pago de intereses de la deuda. Un resultado positivo indica superávit, mientras que un resultado negativo indica déficit.",
        )
        .unit("M $")
        .trend(15.2)
        .point("2025-08-01", -125000.0)
        .point("2025-09-01", -95000.0)
        .point("2025-10-01", -68000.0),
        EconomicIndicator::new(
            IndicatorId::Pbi.as_str(),
            "Producto Bruto Interno (PBI)",
            "El Producto Bruto Interno (PBI) representa el valor total de todos los bienes y servicios finales producidos en el país durante un período determinado. Es el principal indicador del tamaño y salud de la economía.",
        )
        .unit("var. % anual")
        .trend(1.8)
        .point("2025-06-01", -2.1)
        .point("2025-07-01", -0.8)
        .point("2025-08-01", 0.3),
        EconomicIndicator::new(
            IndicatorId::Deuda.as_str(),
            "Deuda Externa y Pública",
            "Representa el total de la deuda del sector público argentino, tanto externa como interna. Incluye obligaciones con organismos internacionales, bonistas privados y otros acreedores. Se mide como porcentaje del PBI para evaluar la sostenibilidad fiscal.",
        )
        .unit("% PBI")
        .trend(-1.2)
        .point("2025-06-01", 87.5)
        .point("2025-07-01", 86.8)
        .point("2025-08-01", 85.9),
        EconomicIndicator::new(
            IndicatorId::CriptoPat.as_str(),
            "Cripto $PAT",
            "Valor de mercado de la criptomoneda $PAT (Patria Token), un activo digital emergente vinculado al ecosistema económico local. Refleja la confianza de inversores en instrumentos alternativos de ahorro y la adopción de tecnologías blockchain en la región.",
        )
        .unit("USD")
        .trend(12.5)
        .point("2025-10-17", 5.2)
        .point("2025-10-18", 5.1)
        .point("2025-10-19", 4.6),
    ]
}
