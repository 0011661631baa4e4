//! Product appearance recognition tables
//!
//! Visual feature extraction, staged recognition thresholds, guards against
//! confusing look-alike products, and the minimal-information strategy.

use crate::error::Result;
use crate::table::{ScoreRange, Table, TableBuilder};

pub const VISUAL_FEATURES: &str = "product_visual_features_utf8.csv";
pub const RECOGNITION_LOGIC: &str = "product_recognition_logic_utf8.csv";
pub const SIMILARITY_PREVENTION: &str = "similarity_prevention_system_utf8.csv";
pub const MINIMAL_INFO: &str = "minimal_info_accuracy_utf8.csv";

/// Accuracy contribution column of the minimal-information table
pub const ACCURACY_CONTRIBUTION: &str = "정확도_기여";

pub fn tables() -> Result<Vec<Table>> {
    Ok(vec![
        visual_features()?,
        recognition_logic()?,
        similarity_prevention()?,
        minimal_info()?,
    ])
}

pub fn visual_features() -> Result<Table> {
    TableBuilder::new("제품 시각적 특징 추출", VISUAL_FEATURES)
        .text(
            "특징카테고리",
            [
                "형태_기본", "형태_세부", "색상_주색상", "색상_보조색상",
                "텍스처_표면", "텍스처_재질", "크기_비율", "크기_절대값",
                "로고_위치", "로고_크기", "텍스트_배치", "텍스트_폰트",
                "패키지_형태", "브랜드_아이덴티티", "제품_카테고리",
            ],
        )
        .scored(
            "중요도",
            ScoreRange::SCORE,
            [10, 8, 9, 7, 6, 7, 8, 5, 9, 7, 6, 4, 9, 10, 9],
        )
        .scored(
            "정확도_기여도",
            ScoreRange::PERCENT,
            [95, 80, 90, 70, 60, 65, 75, 50, 85, 70, 60, 40, 90, 95, 85],
        )
        .scored(
            "추출난이도",
            ScoreRange::SCORE,
            [6, 8, 4, 6, 7, 8, 7, 5, 6, 7, 8, 9, 5, 7, 6],
        )
        .scored(
            "최소_DB크기",
            ScoreRange::POSITIVE,
            [
                1000, 5000, 500, 2000, 3000, 4000, 2000, 1000, 1500, 2000, 3000, 5000, 800, 1200,
                1000,
            ],
        )
        .build()
}

/// Staged recognition with per-stage confidence thresholds
pub fn recognition_logic() -> Result<Table> {
    TableBuilder::new("인식 정확도 확보 로직", RECOGNITION_LOGIC)
        .text(
            "인식단계",
            [
                "1차_형태분류", "2차_색상매칭", "3차_브랜드식별",
                "4차_크기검증", "5차_텍스처확인", "6차_종합판단",
            ],
        )
        .text(
            "알고리즘",
            [
                "CNN 기반 형태 분류",
                "HSV 색상공간 분석",
                "SIFT/ORB 특징점 매칭",
                "비율 기반 크기 추정",
                "LBP 텍스처 분석",
                "가중치 기반 종합점수",
            ],
        )
        .scored(
            "신뢰도_임계값",
            ScoreRange::PERCENT,
            [85, 75, 90, 70, 65, 80],
        )
        .scored(
            "처리시간_ms",
            ScoreRange::POSITIVE,
            [200, 100, 300, 50, 150, 100],
        )
        .text(
            "오판방지_로직",
            [
                "유사형태 필터링",
                "색상범위 제한",
                "브랜드별 화이트리스트",
                "크기 허용오차 ±15%",
                "재질별 임계값 조정",
                "다중검증 필수",
            ],
        )
        .build()
}

/// Look-alike risk factors and the guard against each
pub fn similarity_prevention() -> Result<Table> {
    TableBuilder::new("유사제품 오판 방지", SIMILARITY_PREVENTION)
        .text(
            "오판위험요소",
            [
                "동일_패키지형태", "유사_색상조합", "비슷한_크기",
                "같은_브랜드군", "동일_제품라인", "시즌_한정판",
                "리뉴얼_이전버전", "타지역_동일제품",
            ],
        )
        .scored("위험도", ScoreRange::SCORE, [9, 7, 6, 8, 9, 7, 8, 5])
        .text(
            "방지_알고리즘",
            [
                "브랜드+제품명 조합 검증",
                "색상차이 정량화(ΔE>3)",
                "크기비율 차이>10%",
                "브랜드 계열사 DB 구축",
                "SKU 코드 기반 구분",
                "출시시기 메타데이터",
                "버전 히스토리 추적",
                "지역코드 포함 식별",
            ],
        )
        .scored(
            "신뢰도_향상",
            ScoreRange::PERCENT,
            [15, 10, 8, 12, 20, 8, 15, 5],
        )
        .scored("구현복잡도", ScoreRange::SCORE, [7, 5, 4, 8, 9, 6, 8, 7])
        .build()
}

/// Smallest set of cues that still identifies a product
pub fn minimal_info() -> Result<Table> {
    TableBuilder::new("최소정보 최대정확도 전략", MINIMAL_INFO)
        .text(
            "핵심정보",
            [
                "브랜드로고", "제품명텍스트", "패키지형태", "주색상",
                "용량표시", "제품카테고리", "특징적디자인",
            ],
        )
        .scored(
            ACCURACY_CONTRIBUTION,
            ScoreRange::PERCENT,
            [30, 25, 20, 10, 8, 5, 2],
        )
        .scored(
            "추출_안정성",
            ScoreRange::PERCENT,
            [95, 85, 90, 98, 80, 75, 60],
        )
        .text(
            "데이터_크기",
            ["500KB", "200KB", "100KB", "50KB", "100KB", "50KB", "300KB"],
        )
        .scored(
            "처리_우선순위",
            ScoreRange::new(1, 7),
            [1, 2, 3, 4, 5, 6, 7],
        )
        .text(
            "백업_방법",
            [
                "OCR + 이미지매칭",
                "OCR 텍스트 추출",
                "윤곽선 기반 분류",
                "HSV 히스토그램",
                "OCR 숫자인식",
                "카테고리 분류모델",
                "SIFT 특징점",
            ],
        )
        .build()
}
