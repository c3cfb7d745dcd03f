use serde::{Deserialize, Serialize};

/// Short market summary attached to an enhanced profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketSnapshot {
    pub market_demand: String,
    pub average_salary: String,
    pub job_growth_rate: String,
    pub remote_opportunities: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryTrends {
    pub junior: String,
    pub mid: String,
    pub senior: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketInsights {
    #[serde(alias = "market_demand")]
    pub market_demand: String,
    #[serde(alias = "average_salary")]
    pub average_salary: String,
    #[serde(alias = "job_growth_rate")]
    pub job_growth_rate: String,
    #[serde(alias = "remote_opportunities")]
    pub remote_opportunities: String,
    #[serde(alias = "top_skills")]
    pub top_skills: Vec<String>,
    #[serde(alias = "top_hiring_companies")]
    pub top_hiring_companies: Vec<String>,
    #[serde(alias = "industry_trends")]
    pub industry_trends: Vec<String>,
    #[serde(alias = "salary_trends")]
    pub salary_trends: SalaryTrends,
}

impl MarketInsights {
    pub fn snapshot(&self) -> MarketSnapshot {
        MarketSnapshot {
            market_demand: self.market_demand.clone(),
            average_salary: self.average_salary.clone(),
            job_growth_rate: self.job_growth_rate.clone(),
            remote_opportunities: self.remote_opportunities.clone(),
        }
    }
}
