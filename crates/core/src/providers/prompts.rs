//! Prompt templates, one per request shape.

use super::traits::GenerationRequest;

pub const ADVISOR_SYSTEM_INSTRUCTION: &str =
    "You are a financial expert. Use real market data when it helps the answer.";

/// Free-text advice about the user's finances.
pub fn advice_request(question: &str, context: &str) -> GenerationRequest {
    let prompt = format!(
        "User financial context (values in EUR):\n{context}\n\
         Question: {question}\n\n\
         Answer as NeonOracle, a futuristic financial advisor. Be brief and use Markdown."
    );
    GenerationRequest::new(prompt).with_system_instruction(ADVISOR_SYSTEM_INSTRUCTION)
}

/// Current price, dividend and payment months for one ticker.
pub fn quote_request(ticker: &str) -> GenerationRequest {
    let prompt = format!(
        "Find the current real-time stock price, annual dividend per share, AND typical dividend \
         payment months for ticker symbol \"{ticker}\".\n\n\
         Return ONLY a JSON object with these fields:\n\
         - symbol (string, uppercase)\n\
         - name (string, company name)\n\
         - price (number, current price)\n\
         - currency (string, e.g. \"USD\", \"EUR\")\n\
         - changePercent (number, today's percentage change)\n\
         - annualDividend (number, total annual dividend per share. If none, 0)\n\
         - paymentMonths (array of integers 0-11 representing months, e.g., [0,3,6,9] for \
         Jan/Apr/Jul/Oct. If unknown, guess based on sector or return empty)\n\n\
         Do not add any explanation, just the JSON."
    );
    GenerationRequest::new(prompt).with_search()
}

/// Four current financial headlines.
pub fn news_request() -> GenerationRequest {
    GenerationRequest::new(
        "Find 4 distinct, latest financial news headlines from today (Global or Europe).\n\
         Return ONLY a JSON array of objects with:\n\
         - title (string)\n\
         - tag (string, short category like \"Tech\", \"Crypto\", \"Macro\")\n\
         - time (string, e.g., \"2h ago\")",
    )
    .with_search()
}

/// S&P 500, NASDAQ and IBEX 35 snapshot.
pub fn indices_request() -> GenerationRequest {
    GenerationRequest::new(
        "Find current values for: S&P 500, NASDAQ, and IBEX 35.\n\
         Return ONLY a JSON object with keys \"sp500\", \"nasdaq\", \"ibex\".\n\
         Each value should be an object with:\n\
         - price (string formatted with currency)\n\
         - change (number, percent change)",
    )
    .with_search()
}

/// Valuation metrics and four years of fundamentals.
pub fn deep_analysis_request(ticker: &str) -> GenerationRequest {
    let prompt = format!(
        "Perform a fundamental analysis search for ticker: \"{ticker}\".\n\
         Gather financial data for the last 4 years (including TTM).\n\n\
         Return strictly a JSON object with this structure (use 0 if data not found):\n\
         {{\n\
           \"symbol\": \"string\",\n\
           \"name\": \"string\",\n\
           \"price\": number,\n\
           \"currency\": \"string\",\n\
           \"description\": \"Short 1 sentence company description\",\n\
           \"metrics\": {{\n\
              \"pe\": number,\n\
              \"fcfYield\": number,\n\
              \"dividendYield\": number,\n\
              \"marketCap\": \"string (e.g. 2.30 B)\",\n\
              \"payoutRatio\": number\n\
           }},\n\
           \"history\": {{\n\
              \"revenue\": [{{ \"year\": \"2021\", \"value\": number }}],\n\
              \"eps\": [...], \"fcf\": [...], \"dividends\": [...],\n\
              \"debt\": [...], \"roe\": [...], \"roic\": [...]\n\
           }}\n\
         }}"
    );
    GenerationRequest::new(prompt).with_search()
}
