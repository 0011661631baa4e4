//! Service feature planning tables
//!
//! Feature priorities, ingredient analysis categories, recommendation rules
//! and price comparison sources for the scanning service.

use crate::error::Result;
use crate::table::{ScoreRange, Table, TableBuilder};

pub const CORE_FEATURES: &str = "cosmicscan_core_features_utf8.csv";
pub const INGREDIENT_ANALYSIS: &str = "ingredient_analysis_categories_utf8.csv";
pub const RECOMMENDATION_LOGIC: &str = "recommendation_system_logic_utf8.csv";
pub const PRICE_COMPARISON: &str = "price_comparison_sources_utf8.csv";

pub fn tables() -> Result<Vec<Table>> {
    Ok(vec![
        core_features()?,
        ingredient_analysis()?,
        recommendation_logic()?,
        price_comparison()?,
    ])
}

/// Core feature priorities by MVP stage
pub fn core_features() -> Result<Table> {
    TableBuilder::new("핵심 기능 우선순위", CORE_FEATURES)
        .text(
            "기능명",
            [
                "이미지 OCR 제품인식",
                "성분 유해성 분석",
                "성분 유익성 분석",
                "글로벌 인증 정보",
                "유사제품 추천",
                "함께 사용하면 좋은 제품",
                "같이 사용하면 안되는 제품",
                "최저가 판매처 검색",
                "가격 비교 시스템",
                "제품 성분 데이터베이스",
                "안전성 점수 계산",
                "제품 리뷰 시스템",
            ],
        )
        .scored(
            "필수도",
            ScoreRange::SCORE,
            [10, 10, 9, 8, 9, 8, 9, 7, 7, 10, 9, 6],
        )
        .scored(
            "개발난이도",
            ScoreRange::SCORE,
            [7, 8, 7, 6, 8, 9, 9, 8, 7, 9, 6, 5],
        )
        .text(
            "MVP_단계",
            [
                "1단계", "1단계", "1단계", "2단계", "2단계", "2단계", "2단계", "3단계", "3단계",
                "1단계", "1단계", "3단계",
            ],
        )
        .scored(
            "예상개발일",
            ScoreRange::POSITIVE,
            [5, 7, 5, 4, 6, 8, 8, 10, 6, 10, 3, 4],
        )
        .build()
}

/// Ingredient analysis categories and their data sources
pub fn ingredient_analysis() -> Result<Table> {
    TableBuilder::new("성분 분석 카테고리", INGREDIENT_ANALYSIS)
        .text(
            "분석카테고리",
            [
                "유해성분", "알레르기유발", "자극성분", "발암물질", "환경호르몬",
                "유익성분", "보습성분", "안티에이징", "미백성분", "진정성분",
                "글로벌인증", "FDA승인", "EMA승인", "KFDA승인", "유기농인증",
            ],
        )
        .scored(
            "중요도",
            ScoreRange::SCORE,
            [10, 9, 8, 10, 8, 8, 9, 7, 7, 8, 7, 8, 7, 9, 6],
        )
        .text(
            "데이터소스",
            [
                "EWG Database",
                "INCI Dictionary",
                "식약처 DB",
                "IARC DB",
                "EU SCCS",
                "성분사전",
                "기능성화장품 DB",
                "미백기능 DB",
                "미백기능 DB",
                "진정성분 DB",
                "FDA DB",
                "FDA DB",
                "EMA DB",
                "식약처 DB",
                "유기농인증기관",
            ],
        )
        .scored(
            "구현복잡도",
            ScoreRange::SCORE,
            [8, 7, 6, 9, 8, 6, 5, 7, 7, 5, 9, 8, 8, 7, 6],
        )
        .build()
}

/// Recommendation heuristics with confidence and difficulty
pub fn recommendation_logic() -> Result<Table> {
    TableBuilder::new("추천 시스템 로직", RECOMMENDATION_LOGIC)
        .text(
            "추천타입",
            [
                "유사제품_동일브랜드",
                "유사제품_다른브랜드",
                "함께사용_보완성분",
                "함께사용_시너지효과",
                "사용금지_성분충돌",
                "사용금지_과다사용위험",
                "대체제품_저자극",
                "대체제품_고기능",
            ],
        )
        .text(
            "추천기준",
            [
                "주성분 유사도 80% 이상",
                "기능 카테고리 동일 + 성분 유사도 70%",
                "부족한 성분 보완 (보습+유분)",
                "상호 효과 증진 (비타민C+비타민E)",
                "반응 위험성 (AHA+BHA 동시사용)",
                "농도 과다 위험 (레티놀 중복)",
                "민감성 피부용 순한 성분",
                "효과 강화 버전",
            ],
        )
        .scored(
            "신뢰도",
            ScoreRange::PERCENT,
            [90, 85, 80, 75, 95, 90, 85, 80],
        )
        .scored("구현난이도", ScoreRange::SCORE, [6, 7, 8, 9, 8, 7, 6, 7])
        .build()
}

/// Retail sources for price comparison
pub fn price_comparison() -> Result<Table> {
    TableBuilder::new("가격비교 시스템", PRICE_COMPARISON)
        .text(
            "판매처",
            [
                "올리브영", "세포라", "롯데백화점", "GS25", "편의점",
                "쿠팡", "11번가", "G마켓", "옥션", "티몬",
                "공식몰", "브랜드직영몰", "면세점온라인", "해외직구",
            ],
        )
        .scored(
            "크롤링난이도",
            ScoreRange::SCORE,
            [7, 8, 6, 5, 5, 8, 7, 7, 7, 6, 6, 5, 8, 9],
        )
        .scored(
            "데이터신뢰도",
            ScoreRange::SCORE,
            [9, 9, 8, 7, 7, 8, 8, 8, 7, 7, 10, 9, 8, 6],
        )
        .text(
            "업데이트주기",
            [
                "일 2회", "일 1회", "일 1회", "주 1회", "주 1회", "실시간", "실시간", "실시간",
                "실시간", "실시간", "실시간", "실시간", "일 1회", "주 1회",
            ],
        )
        .text(
            "법적이슈",
            [
                "없음", "없음", "없음", "없음", "없음", "없음", "없음", "없음", "없음", "없음",
                "없음", "없음", "주의", "높음",
            ],
        )
        .build()
}
