use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use serde::Deserialize;
use serde::Serialize;
use ttev_analysis::API;
use ttev_analysis::Notice;
use ttev_analysis::Report;
use ttev_analysis::Selection;
use ttev_labels::Action;
use ttev_labels::Spin;
use ttev_scenario::Config;
use ttev_scenario::Scenario;

#[derive(Debug, Deserialize)]
pub struct ScenarioQuery {
    pub scenario: String,
}

#[derive(Debug, Deserialize)]
pub struct SpinQuery {
    pub scenario: String,
    pub action: String,
}

/// A code and its display label.
#[derive(Debug, Serialize)]
pub struct Choice {
    pub code: u8,
    pub label: &'static str,
}

impl From<Action> for Choice {
    fn from(action: Action) -> Self {
        Self {
            code: action.code(),
            label: action.label(),
        }
    }
}
impl From<Spin> for Choice {
    fn from(spin: Spin) -> Self {
        Self {
            code: spin.code(),
            label: spin.label(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Listing {
    #[serde(flatten)]
    pub config: &'static Config,
    pub actions: Vec<Choice>,
}

pub async fn scenarios(api: web::Data<API>) -> impl Responder {
    HttpResponse::Ok().json(
        api.scenarios()
            .into_iter()
            .map(|config| Listing {
                config,
                actions: config.actions().iter().copied().map(Choice::from).collect(),
            })
            .collect::<Vec<Listing>>(),
    )
}
pub async fn actions(api: web::Data<API>, req: web::Query<ScenarioQuery>) -> impl Responder {
    match Scenario::try_from(req.scenario.as_str()) {
        Err(e) => HttpResponse::BadRequest().body(e),
        Ok(scenario) => HttpResponse::Ok().json(
            api.actions(scenario)
                .iter()
                .copied()
                .map(Choice::from)
                .collect::<Vec<Choice>>(),
        ),
    }
}
pub async fn spins(api: web::Data<API>, req: web::Query<SpinQuery>) -> impl Responder {
    let scenario = Scenario::try_from(req.scenario.as_str());
    let action = Action::try_from(req.action.as_str());
    match (scenario, action) {
        (Err(e), _) => HttpResponse::BadRequest().body(e),
        (_, Err(e)) => HttpResponse::BadRequest().body(e),
        (Ok(scenario), Ok(action)) if !scenario.config().offers(action) => HttpResponse::BadRequest()
            .body(format!("action {} is not offered by scenario {}", action.code(), scenario)),
        (Ok(scenario), Ok(action)) => match web::block(move || api.spins(scenario, action)).await {
            Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
            Ok(Err(e)) => failed(e),
            Ok(Ok(spins)) => HttpResponse::Ok().json(spins.into_iter().map(Choice::from).collect::<Vec<Choice>>()),
        },
    }
}
pub async fn render(api: web::Data<API>, req: web::Json<Selection>) -> impl Responder {
    match report(api, req.into_inner()).await {
        Err(response) => response,
        Ok(report) => HttpResponse::Ok().json(report),
    }
}
pub async fn chart(api: web::Data<API>, req: web::Json<Selection>) -> impl Responder {
    match report(api, req.into_inner()).await {
        Err(response) => response,
        Ok(report) => match report.chart.as_ref().map(ttev_charts::svg) {
            None => HttpResponse::NotFound().body(Notice::EmptySelection.message()),
            Some(Err(e)) => failed(e),
            Some(Ok(svg)) => HttpResponse::Ok().content_type("image/svg+xml").body(svg),
        },
    }
}

/// Guard-rail violations are the caller's fault; anything after is ours.
async fn report(api: web::Data<API>, selection: Selection) -> Result<Report, HttpResponse> {
    if let Err(e) = selection.check() {
        return Err(HttpResponse::BadRequest().body(e.to_string()));
    }
    match web::block(move || api.render(&selection)).await {
        Err(e) => Err(HttpResponse::InternalServerError().body(e.to_string())),
        Ok(Err(e)) => Err(failed(e)),
        Ok(Ok(report)) => Ok(report),
    }
}

fn failed(e: anyhow::Error) -> HttpResponse {
    log::error!("request failed: {}", e);
    HttpResponse::InternalServerError().body(e.to_string())
}
