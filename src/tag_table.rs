//! OpenType language system tags of ISO 639-2 and ISO 639-3 codes.

use crate::Tag;

/// Sorted by code. A code listed several times maps to several language
/// systems, in preference order.
pub(crate) const LANGUAGE_TABLE: &[(&str, Tag)] = &[
    ("aar", Tag::from_bytes(b"AFR ")), // Afar
    ("abk", Tag::from_bytes(b"ABK ")), // Abkhazian
    ("abq", Tag::from_bytes(b"ABA ")), // Abaza
    ("abs", Tag::from_bytes(b"CPP ")), // Creoles
    ("acf", Tag::from_bytes(b"CPP ")), // Creoles
    ("acf", Tag::from_bytes(b"FAN ")), // French Antillean
    ("ach", Tag::from_bytes(b"ACH ")), // Acholi
    ("acr", Tag::from_bytes(b"ACR ")), // Achi
    ("acr", Tag::from_bytes(b"MYN ")), // Mayan
    ("ada", Tag::from_bytes(b"DNG ")), // Dangme
    ("ady", Tag::from_bytes(b"ADY ")), // Adyghe
    ("afr", Tag::from_bytes(b"AFK ")), // Afrikaans
    ("afs", Tag::from_bytes(b"CPP ")), // Creoles
    ("agu", Tag::from_bytes(b"MYN ")), // Mayan
    ("ahg", Tag::from_bytes(b"AGW ")), // Agaw
    ("aht", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("aig", Tag::from_bytes(b"CPP ")), // Creoles
    ("aii", Tag::from_bytes(b"SWA ")), // Swadaya Aramaic
    ("aii", Tag::from_bytes(b"SYR ")), // Syriac
    ("aio", Tag::from_bytes(b"AIO ")), // Aiton
    ("aiw", Tag::from_bytes(b"ARI ")), // Aari
    ("aka", Tag::from_bytes(b"AKA ")), // Akan
    ("akb", Tag::from_bytes(b"AKB ")), // Batak Angkola
    ("akb", Tag::from_bytes(b"BTK ")), // Batak languages
    ("alt", Tag::from_bytes(b"ALT ")), // Altai
    ("amf", Tag::from_bytes(b"HBN ")), // Hammer-Banna
    ("amh", Tag::from_bytes(b"AMH ")), // Amharic
    ("amw", Tag::from_bytes(b"SYR ")), // Syriac
    ("ang", Tag::from_bytes(b"ANG ")), // Anglo-Saxon
    ("aoa", Tag::from_bytes(b"CPP ")), // Creoles
    ("apa", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("apj", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("apk", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("apl", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("apm", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("apw", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("ara", Tag::from_bytes(b"ARA ")), // Arabic
    ("arg", Tag::from_bytes(b"ARG ")), // Aragonese
    ("arn", Tag::from_bytes(b"MAP ")), // Mapudungun
    ("asm", Tag::from_bytes(b"ASM ")), // Assamese
    ("ast", Tag::from_bytes(b"AST ")), // Asturian
    ("ath", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("atj", Tag::from_bytes(b"RCR ")), // R-Cree
    ("atv", Tag::from_bytes(b"ALT ")), // Altai
    ("auj", Tag::from_bytes(b"BBR ")), // Berber
    ("ava", Tag::from_bytes(b"AVR ")), // Avar
    ("awa", Tag::from_bytes(b"AWA ")), // Awadhi
    ("aym", Tag::from_bytes(b"AYM ")), // Aymara
    ("azb", Tag::from_bytes(b"AZB ")), // Torki
    ("azd", Tag::from_bytes(b"NAH ")), // Nahuatl
    ("aze", Tag::from_bytes(b"AZE ")), // Azerbaijani
    ("azn", Tag::from_bytes(b"NAH ")), // Nahuatl
    ("azz", Tag::from_bytes(b"NAH ")), // Nahuatl
    ("bad", Tag::from_bytes(b"BAD0")), // Banda
    ("bah", Tag::from_bytes(b"CPP ")), // Creoles
    ("bai", Tag::from_bytes(b"BML ")), // Bamileke
    ("bak", Tag::from_bytes(b"BSH ")), // Bashkir
    ("bal", Tag::from_bytes(b"BLI ")), // Baluchi
    ("bam", Tag::from_bytes(b"BMB ")), // Bambara (Bamanankan)
    ("ban", Tag::from_bytes(b"BAN ")), // Balinese
    ("bar", Tag::from_bytes(b"BAR ")), // Bavarian
    ("bbc", Tag::from_bytes(b"BBC ")), // Batak Toba
    ("bbc", Tag::from_bytes(b"BTK ")), // Batak languages
    ("bbj", Tag::from_bytes(b"BML ")), // Bamileke
    ("bbp", Tag::from_bytes(b"BAD0")), // Banda
    ("bci", Tag::from_bytes(b"BAU ")), // Baule
    ("bcl", Tag::from_bytes(b"BIK ")), // Bikol
    ("bcq", Tag::from_bytes(b"BCH ")), // Bench
    ("bcr", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("bdy", Tag::from_bytes(b"BDY ")), // Bandjalang
    ("bea", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("beb", Tag::from_bytes(b"BTI ")), // Beti
    ("bel", Tag::from_bytes(b"BEL ")), // Belarussian
    ("bem", Tag::from_bytes(b"BEM ")), // Bemba
    ("ben", Tag::from_bytes(b"BEN ")), // Bengali
    ("ber", Tag::from_bytes(b"BBR ")), // Berber
    ("bew", Tag::from_bytes(b"CPP ")), // Creoles
    ("bfl", Tag::from_bytes(b"BAD0")), // Banda
    ("bfq", Tag::from_bytes(b"BAD ")), // Badaga
    ("bft", Tag::from_bytes(b"BLT ")), // Balti
    ("bfu", Tag::from_bytes(b"LAH ")), // Lahuli
    ("bfy", Tag::from_bytes(b"BAG ")), // Baghelkhandi
    ("bgc", Tag::from_bytes(b"BGC ")), // Haryanvi
    ("bgq", Tag::from_bytes(b"BGQ ")), // Bagri
    ("bgr", Tag::from_bytes(b"QIN ")), // Chin
    ("bhb", Tag::from_bytes(b"BHI ")), // Bhili
    ("bhi", Tag::from_bytes(b"BHI ")), // Bhili
    ("bhk", Tag::from_bytes(b"BIK ")), // Bikol
    ("bho", Tag::from_bytes(b"BHO ")), // Bhojpuri
    ("bik", Tag::from_bytes(b"BIK ")), // Bikol
    ("bin", Tag::from_bytes(b"EDO ")), // Edo
    ("bis", Tag::from_bytes(b"BIS ")), // Bislama
    ("bis", Tag::from_bytes(b"CPP ")), // Creoles
    ("biu", Tag::from_bytes(b"QIN ")), // Chin
    ("bjj", Tag::from_bytes(b"BJJ ")), // Kanauji
    ("bjo", Tag::from_bytes(b"BAD0")), // Banda
    ("bjs", Tag::from_bytes(b"CPP ")), // Creoles
    ("bjt", Tag::from_bytes(b"BLN ")), // Balante
    ("bko", Tag::from_bytes(b"BML ")), // Bamileke
    ("bla", Tag::from_bytes(b"BKF ")), // Blackfoot
    ("ble", Tag::from_bytes(b"BLN ")), // Balante
    ("blk", Tag::from_bytes(b"BLK ")), // Pao Karen
    ("blk", Tag::from_bytes(b"KRN ")), // Karen
    ("bln", Tag::from_bytes(b"BIK ")), // Bikol
    ("bod", Tag::from_bytes(b"TIB ")), // Tibetan
    ("bos", Tag::from_bytes(b"BOS ")), // Bosnian
    ("bpd", Tag::from_bytes(b"BAD0")), // Banda
    ("bpl", Tag::from_bytes(b"CPP ")), // Creoles
    ("bpq", Tag::from_bytes(b"CPP ")), // Creoles
    ("bpy", Tag::from_bytes(b"BPY ")), // Bishnupriya Manipuri
    ("bqi", Tag::from_bytes(b"LRC ")), // Luri
    ("bqk", Tag::from_bytes(b"BAD0")), // Banda
    ("bra", Tag::from_bytes(b"BRI ")), // Braj Bhasha
    ("brc", Tag::from_bytes(b"CPP ")), // Creoles
    ("bre", Tag::from_bytes(b"BRE ")), // Breton
    ("brh", Tag::from_bytes(b"BRH ")), // Brahui
    ("brx", Tag::from_bytes(b"BRX ")), // Bodo
    ("bsk", Tag::from_bytes(b"BSK ")), // Burushaski
    ("btb", Tag::from_bytes(b"BTI ")), // Beti
    ("btd", Tag::from_bytes(b"BTD ")), // Batak Dairi (Pakpak)
    ("btd", Tag::from_bytes(b"BTK ")), // Batak languages
    ("btk", Tag::from_bytes(b"BTK ")), // Batak languages
    ("btm", Tag::from_bytes(b"BTK ")), // Batak languages
    ("btm", Tag::from_bytes(b"BTM ")), // Batak Mandailing
    ("bto", Tag::from_bytes(b"BIK ")), // Bikol
    ("bts", Tag::from_bytes(b"BTK ")), // Batak languages
    ("bts", Tag::from_bytes(b"BTS ")), // Batak Simalungun
    ("btx", Tag::from_bytes(b"BTK ")), // Batak languages
    ("btx", Tag::from_bytes(b"BTX ")), // Batak Karo
    ("btz", Tag::from_bytes(b"BTK ")), // Batak languages
    ("btz", Tag::from_bytes(b"BTZ ")), // Batak Alas-Kluet
    ("bug", Tag::from_bytes(b"BUG ")), // Bugis
    ("bul", Tag::from_bytes(b"BGR ")), // Bulgarian
    ("bum", Tag::from_bytes(b"BTI ")), // Beti
    ("bwe", Tag::from_bytes(b"KRN ")), // Karen
    ("bxo", Tag::from_bytes(b"CPP ")), // Creoles
    ("bxp", Tag::from_bytes(b"BTI ")), // Beti
    ("bxr", Tag::from_bytes(b"RBU ")), // Russian Buriat
    ("byn", Tag::from_bytes(b"BIL ")), // Bilen
    ("byv", Tag::from_bytes(b"BML ")), // Bamileke
    ("byv", Tag::from_bytes(b"BYV ")), // Medumba
    ("bzj", Tag::from_bytes(b"CPP ")), // Creoles
    ("bzk", Tag::from_bytes(b"CPP ")), // Creoles
    ("caa", Tag::from_bytes(b"MYN ")), // Mayan
    ("cac", Tag::from_bytes(b"MYN ")), // Mayan
    ("caf", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("caf", Tag::from_bytes(b"CRR ")), // Carrier
    ("cak", Tag::from_bytes(b"CAK ")), // Kaqchikel
    ("cak", Tag::from_bytes(b"MYN ")), // Mayan
    ("cat", Tag::from_bytes(b"CAT ")), // Catalan
    ("cbk", Tag::from_bytes(b"CBK ")), // Zamboanga Chavacano
    ("cbk", Tag::from_bytes(b"CPP ")), // Creoles
    ("cbl", Tag::from_bytes(b"QIN ")), // Chin
    ("ccl", Tag::from_bytes(b"CPP ")), // Creoles
    ("ccm", Tag::from_bytes(b"CPP ")), // Creoles
    ("cco", Tag::from_bytes(b"CCHN")), // Chinantec
    ("ceb", Tag::from_bytes(b"CEB ")), // Cebuano
    ("cek", Tag::from_bytes(b"QIN ")), // Chin
    ("ces", Tag::from_bytes(b"CSY ")), // Czech
    ("cey", Tag::from_bytes(b"QIN ")), // Chin
    ("cfm", Tag::from_bytes(b"HAL ")), // Halam (Falam Chin)
    ("cfm", Tag::from_bytes(b"QIN ")), // Chin
    ("cgg", Tag::from_bytes(b"CGG ")), // Chiga
    ("cha", Tag::from_bytes(b"CHA ")), // Chamorro
    ("che", Tag::from_bytes(b"CHE ")), // Chechen
    ("chf", Tag::from_bytes(b"MYN ")), // Mayan
    ("chj", Tag::from_bytes(b"CCHN")), // Chinantec
    ("chk", Tag::from_bytes(b"CHK0")), // Chuukese
    ("chn", Tag::from_bytes(b"CPP ")), // Creoles
    ("cho", Tag::from_bytes(b"CHO ")), // Choctaw
    ("chp", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("chp", Tag::from_bytes(b"CHP ")), // Chipewyan
    ("chp", Tag::from_bytes(b"SAY ")), // Sayisi
    ("chq", Tag::from_bytes(b"CCHN")), // Chinantec
    ("chr", Tag::from_bytes(b"CHR ")), // Cherokee
    ("chu", Tag::from_bytes(b"CSL ")), // Church Slavonic
    ("chv", Tag::from_bytes(b"CHU ")), // Chuvash
    ("chy", Tag::from_bytes(b"CHY ")), // Cheyenne
    ("chz", Tag::from_bytes(b"CCHN")), // Chinantec
    ("cja", Tag::from_bytes(b"CJA ")), // Western Cham
    ("cjm", Tag::from_bytes(b"CJM ")), // Eastern Cham
    ("cka", Tag::from_bytes(b"QIN ")), // Chin
    ("ckn", Tag::from_bytes(b"QIN ")), // Chin
    ("cks", Tag::from_bytes(b"CPP ")), // Creoles
    ("ckt", Tag::from_bytes(b"CHK ")), // Chukchi
    ("ckz", Tag::from_bytes(b"MYN ")), // Mayan
    ("clc", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("cld", Tag::from_bytes(b"SYR ")), // Syriac
    ("cle", Tag::from_bytes(b"CCHN")), // Chinantec
    ("clj", Tag::from_bytes(b"QIN ")), // Chin
    ("clt", Tag::from_bytes(b"QIN ")), // Chin
    ("cmr", Tag::from_bytes(b"QIN ")), // Chin
    ("cnb", Tag::from_bytes(b"QIN ")), // Chin
    ("cnh", Tag::from_bytes(b"QIN ")), // Chin
    ("cnk", Tag::from_bytes(b"QIN ")), // Chin
    ("cnl", Tag::from_bytes(b"CCHN")), // Chinantec
    ("cnr", Tag::from_bytes(b"SRB ")), // Serbian
    ("cnt", Tag::from_bytes(b"CCHN")), // Chinantec
    ("cnu", Tag::from_bytes(b"BBR ")), // Berber
    ("cnw", Tag::from_bytes(b"QIN ")), // Chin
    ("cob", Tag::from_bytes(b"MYN ")), // Mayan
    ("cop", Tag::from_bytes(b"COP ")), // Coptic
    ("coq", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("cor", Tag::from_bytes(b"COR ")), // Cornish
    ("cos", Tag::from_bytes(b"COS ")), // Corsican
    ("cpa", Tag::from_bytes(b"CCHN")), // Chinantec
    ("cpe", Tag::from_bytes(b"CPP ")), // Creoles
    ("cpf", Tag::from_bytes(b"CPP ")), // Creoles
    ("cpi", Tag::from_bytes(b"CPP ")), // Creoles
    ("cpp", Tag::from_bytes(b"CPP ")), // Creoles
    ("cre", Tag::from_bytes(b"CRE ")), // Cree
    ("crh", Tag::from_bytes(b"CRT ")), // Crimean Tatar
    ("cri", Tag::from_bytes(b"CPP ")), // Creoles
    ("crj", Tag::from_bytes(b"ECR ")), // Eastern Cree
    ("crj", Tag::from_bytes(b"YCR ")), // Y-Cree
    ("crk", Tag::from_bytes(b"WCR ")), // West-Cree
    ("crk", Tag::from_bytes(b"YCR ")), // Y-Cree
    ("crl", Tag::from_bytes(b"ECR ")), // Eastern Cree
    ("crl", Tag::from_bytes(b"YCR ")), // Y-Cree
    ("crm", Tag::from_bytes(b"LCR ")), // L-Cree
    ("crm", Tag::from_bytes(b"MCR ")), // Moose Cree
    ("crp", Tag::from_bytes(b"CPP ")), // Creoles
    ("crs", Tag::from_bytes(b"CPP ")), // Creoles
    ("crx", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("crx", Tag::from_bytes(b"CRR ")), // Carrier
    ("csa", Tag::from_bytes(b"CCHN")), // Chinantec
    ("csb", Tag::from_bytes(b"CSB ")), // Kashubian
    ("csh", Tag::from_bytes(b"QIN ")), // Chin
    ("csj", Tag::from_bytes(b"QIN ")), // Chin
    ("cso", Tag::from_bytes(b"CCHN")), // Chinantec
    ("csv", Tag::from_bytes(b"QIN ")), // Chin
    ("csw", Tag::from_bytes(b"NCR ")), // N-Cree
    ("csw", Tag::from_bytes(b"NHC ")), // Norway House Cree
    ("csy", Tag::from_bytes(b"QIN ")), // Chin
    ("ctc", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("ctd", Tag::from_bytes(b"QIN ")), // Chin
    ("cte", Tag::from_bytes(b"CCHN")), // Chinantec
    ("ctg", Tag::from_bytes(b"CTG ")), // Chittagonian
    ("cth", Tag::from_bytes(b"QIN ")), // Chin
    ("ctl", Tag::from_bytes(b"CCHN")), // Chinantec
    ("cts", Tag::from_bytes(b"BIK ")), // Bikol
    ("ctu", Tag::from_bytes(b"MYN ")), // Mayan
    ("cuc", Tag::from_bytes(b"CCHN")), // Chinantec
    ("cuk", Tag::from_bytes(b"CUK ")), // San Blas Kuna
    ("cvn", Tag::from_bytes(b"CCHN")), // Chinantec
    ("cwd", Tag::from_bytes(b"DCR ")), // Woods Cree
    ("cwd", Tag::from_bytes(b"TCR ")), // TH-Cree
    ("cym", Tag::from_bytes(b"WEL ")), // Welsh
    ("czt", Tag::from_bytes(b"QIN ")), // Chin
    ("dag", Tag::from_bytes(b"DAG ")), // Dagbani
    ("dan", Tag::from_bytes(b"DAN ")), // Danish
    ("dao", Tag::from_bytes(b"QIN ")), // Chin
    ("dap", Tag::from_bytes(b"NIS ")), // Nisi
    ("dar", Tag::from_bytes(b"DAR ")), // Dargwa
    ("dax", Tag::from_bytes(b"DAX ")), // Dayi
    ("dcr", Tag::from_bytes(b"CPP ")), // Creoles
    ("den", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("den", Tag::from_bytes(b"SLA ")), // Slavey
    ("dep", Tag::from_bytes(b"CPP ")), // Creoles
    ("deu", Tag::from_bytes(b"DEU ")), // German
    ("dgo", Tag::from_bytes(b"DGO ")), // Dogri (individual language)
    ("dgr", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("dhd", Tag::from_bytes(b"MAW ")), // Marwari
    ("dhg", Tag::from_bytes(b"DHG ")), // Dhangu
    ("din", Tag::from_bytes(b"DNK ")), // Dinka
    ("diq", Tag::from_bytes(b"DIQ ")), // Dimli
    ("div", Tag::from_bytes(b"DHV ")), // Divehi (Dhivehi, Maldivian)
    ("div", Tag::from_bytes(b"DIV ")), // Divehi (Dhivehi, Maldivian)
    ("dje", Tag::from_bytes(b"DJR ")), // Zarma
    ("djk", Tag::from_bytes(b"CPP ")), // Creoles
    ("djr", Tag::from_bytes(b"DJR0")), // Djambarrpuyngu
    ("dng", Tag::from_bytes(b"DUN ")), // Dungan
    ("dnj", Tag::from_bytes(b"DNJ ")), // Dan
    ("doi", Tag::from_bytes(b"DGR ")), // Dogri (macrolanguage)
    ("dsb", Tag::from_bytes(b"LSB ")), // Lower Sorbian
    ("duj", Tag::from_bytes(b"DUJ ")), // Dhuwal
    ("dwu", Tag::from_bytes(b"DUJ ")), // Dhuwal
    ("dwy", Tag::from_bytes(b"DUJ ")), // Dhuwal
    ("dyu", Tag::from_bytes(b"JUL ")), // Jula
    ("dzo", Tag::from_bytes(b"DZN ")), // Dzongkha
    ("efi", Tag::from_bytes(b"EFI ")), // Efik
    ("eky", Tag::from_bytes(b"KRN ")), // Karen
    ("ell", Tag::from_bytes(b"ELL ")), // Greek
    ("ell", Tag::from_bytes(b"PGR ")), // Polytonic Greek
    ("emk", Tag::from_bytes(b"EMK ")), // Eastern Maninkakan
    ("emk", Tag::from_bytes(b"MNK ")), // Maninka
    ("emy", Tag::from_bytes(b"MYN ")), // Mayan
    ("enf", Tag::from_bytes(b"FNE ")), // Forest Enets
    ("eng", Tag::from_bytes(b"ENG ")), // English
    ("enh", Tag::from_bytes(b"TNE ")), // Tundra Enets
    ("epo", Tag::from_bytes(b"NTO ")), // Esperanto
    ("est", Tag::from_bytes(b"ETI ")), // Estonian
    ("esu", Tag::from_bytes(b"ESU ")), // Central Yupik
    ("eto", Tag::from_bytes(b"BTI ")), // Beti
    ("eus", Tag::from_bytes(b"EUQ ")), // Basque
    ("eve", Tag::from_bytes(b"EVN ")), // Even
    ("evn", Tag::from_bytes(b"EVK ")), // Evenki
    ("ewe", Tag::from_bytes(b"EWE ")), // Ewe
    ("ewo", Tag::from_bytes(b"BTI ")), // Beti
    ("fab", Tag::from_bytes(b"CPP ")), // Creoles
    ("fan", Tag::from_bytes(b"FAN0")), // Fang
    ("fao", Tag::from_bytes(b"FOS ")), // Faroese
    ("fas", Tag::from_bytes(b"FAR ")), // Persian
    ("fat", Tag::from_bytes(b"AKA ")), // Akan
    ("fat", Tag::from_bytes(b"FAT ")), // Fanti
    ("fbl", Tag::from_bytes(b"BIK ")), // Bikol
    ("fij", Tag::from_bytes(b"FJI ")), // Fijian
    ("fil", Tag::from_bytes(b"PIL ")), // Filipino
    ("fin", Tag::from_bytes(b"FIN ")), // Finnish
    ("fmp", Tag::from_bytes(b"BML ")), // Bamileke
    ("fmp", Tag::from_bytes(b"FMP ")), // Fefe
    ("fng", Tag::from_bytes(b"CPP ")), // Creoles
    ("fon", Tag::from_bytes(b"FON ")), // Fon
    ("fpe", Tag::from_bytes(b"CPP ")), // Creoles
    ("fra", Tag::from_bytes(b"FRA ")), // French
    ("frc", Tag::from_bytes(b"FRC ")), // Cajun French
    ("frp", Tag::from_bytes(b"FRP ")), // Arpitan
    ("fry", Tag::from_bytes(b"FRI ")), // Frisian
    ("fuf", Tag::from_bytes(b"FTA ")), // Futa
    ("ful", Tag::from_bytes(b"FUL ")), // Fulah
    ("fur", Tag::from_bytes(b"FRL ")), // Friulian
    ("fuv", Tag::from_bytes(b"FUV ")), // Nigerian Fulfulde
    ("gaa", Tag::from_bytes(b"GAD ")), // Ga
    ("gac", Tag::from_bytes(b"CPP ")), // Creoles
    ("gag", Tag::from_bytes(b"GAG ")), // Gagauz
    ("gbm", Tag::from_bytes(b"GAW ")), // Garhwali
    ("gce", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("gcf", Tag::from_bytes(b"CPP ")), // Creoles
    ("gcl", Tag::from_bytes(b"CPP ")), // Creoles
    ("gcr", Tag::from_bytes(b"CPP ")), // Creoles
    ("gez", Tag::from_bytes(b"GEZ ")), // Geez
    ("gha", Tag::from_bytes(b"BBR ")), // Berber
    ("ghk", Tag::from_bytes(b"KRN ")), // Karen
    ("gho", Tag::from_bytes(b"BBR ")), // Berber
    ("gib", Tag::from_bytes(b"CPP ")), // Creoles
    ("gih", Tag::from_bytes(b"GIH ")), // Githabul
    ("gil", Tag::from_bytes(b"GIL0")), // Kiribati (Gilbertese)
    ("gkp", Tag::from_bytes(b"GKP ")), // Kpelle (Guinea)
    ("gla", Tag::from_bytes(b"GAE ")), // Scottish Gaelic (Gaelic)
    ("gld", Tag::from_bytes(b"NAN ")), // Nanai
    ("gle", Tag::from_bytes(b"IRI ")), // Irish
    ("gle", Tag::from_bytes(b"IRT ")), // Irish Traditional
    ("glg", Tag::from_bytes(b"GAL ")), // Galician
    ("glk", Tag::from_bytes(b"GLK ")), // Gilaki
    ("glv", Tag::from_bytes(b"MNX ")), // Manx
    ("gnb", Tag::from_bytes(b"QIN ")), // Chin
    ("gnn", Tag::from_bytes(b"GNN ")), // Gumatj
    ("gog", Tag::from_bytes(b"GOG ")), // Gogo
    ("gon", Tag::from_bytes(b"GON ")), // Gondi
    ("goq", Tag::from_bytes(b"CPP ")), // Creoles
    ("gox", Tag::from_bytes(b"BAD0")), // Banda
    ("gpe", Tag::from_bytes(b"CPP ")), // Creoles
    ("grn", Tag::from_bytes(b"GUA ")), // Guarani
    ("grr", Tag::from_bytes(b"BBR ")), // Berber
    ("grt", Tag::from_bytes(b"GRO ")), // Garo
    ("gru", Tag::from_bytes(b"SOG ")), // Sodo Gurage
    ("gsw", Tag::from_bytes(b"ALS ")), // Alsatian
    ("guc", Tag::from_bytes(b"GUC ")), // Wayuu
    ("guf", Tag::from_bytes(b"GUF ")), // Gupapuyngu
    ("guj", Tag::from_bytes(b"GUJ ")), // Gujarati
    ("guk", Tag::from_bytes(b"GMZ ")), // Gumuz
    ("gul", Tag::from_bytes(b"CPP ")), // Creoles
    ("guz", Tag::from_bytes(b"GUZ ")), // Gusii
    ("gwi", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("gyn", Tag::from_bytes(b"CPP ")), // Creoles
    ("haa", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("har", Tag::from_bytes(b"HRI ")), // Harari
    ("hat", Tag::from_bytes(b"CPP ")), // Creoles
    ("hat", Tag::from_bytes(b"HAI ")), // Haitian (Haitian Creole)
    ("hau", Tag::from_bytes(b"HAU ")), // Hausa
    ("haw", Tag::from_bytes(b"HAW ")), // Hawaiian
    ("hay", Tag::from_bytes(b"HAY ")), // Haya
    ("haz", Tag::from_bytes(b"HAZ ")), // Hazaragi
    ("hca", Tag::from_bytes(b"CPP ")), // Creoles
    ("heb", Tag::from_bytes(b"IWR ")), // Hebrew
    ("her", Tag::from_bytes(b"HER ")), // Herero
    ("hil", Tag::from_bytes(b"HIL ")), // Hiligaynon
    ("hin", Tag::from_bytes(b"HIN ")), // Hindi
    ("hlt", Tag::from_bytes(b"QIN ")), // Chin
    ("hmn", Tag::from_bytes(b"HMN ")), // Hmong
    ("hmo", Tag::from_bytes(b"CPP ")), // Creoles
    ("hmo", Tag::from_bytes(b"HMO ")), // Hiri Motu
    ("hmr", Tag::from_bytes(b"QIN ")), // Chin
    ("hnd", Tag::from_bytes(b"HND ")), // Hindko
    ("hne", Tag::from_bytes(b"CHH ")), // Chattisgarhi
    ("hno", Tag::from_bytes(b"HND ")), // Hindko
    ("hoc", Tag::from_bytes(b"HO  ")), // Ho
    ("hoi", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("hoj", Tag::from_bytes(b"HAR ")), // Harauti
    ("hra", Tag::from_bytes(b"QIN ")), // Chin
    ("hrv", Tag::from_bytes(b"HRV ")), // Croatian
    ("hsb", Tag::from_bytes(b"USB ")), // Upper Sorbian
    ("hun", Tag::from_bytes(b"HUN ")), // Hungarian
    ("hup", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("hus", Tag::from_bytes(b"MYN ")), // Mayan
    ("hwc", Tag::from_bytes(b"CPP ")), // Creoles
    ("hye", Tag::from_bytes(b"HYE ")), // Armenian
    ("hye", Tag::from_bytes(b"HYE0")), // Armenian East
    ("hyw", Tag::from_bytes(b"HYE ")), // Armenian
    ("iba", Tag::from_bytes(b"IBA ")), // Iban
    ("ibb", Tag::from_bytes(b"IBB ")), // Ibibio
    ("ibo", Tag::from_bytes(b"IBO ")), // Igbo
    ("iby", Tag::from_bytes(b"IJO ")), // Ijo languages
    ("icr", Tag::from_bytes(b"CPP ")), // Creoles
    ("idb", Tag::from_bytes(b"CPP ")), // Creoles
    ("ido", Tag::from_bytes(b"IDO ")), // Ido
    ("igb", Tag::from_bytes(b"EBI ")), // Ebira
    ("ihb", Tag::from_bytes(b"CPP ")), // Creoles
    ("iii", Tag::from_bytes(b"YIM ")), // Yi Modern
    ("ijc", Tag::from_bytes(b"IJO ")), // Ijo languages
    ("ije", Tag::from_bytes(b"IJO ")), // Ijo languages
    ("ijn", Tag::from_bytes(b"IJO ")), // Ijo languages
    ("ijo", Tag::from_bytes(b"IJO ")), // Ijo languages
    ("ijs", Tag::from_bytes(b"IJO ")), // Ijo languages
    ("iku", Tag::from_bytes(b"INU ")), // Inuktitut
    ("ile", Tag::from_bytes(b"ILE ")), // Interlingue
    ("ilo", Tag::from_bytes(b"ILO ")), // Ilokano
    ("ina", Tag::from_bytes(b"INA ")), // Interlingua
    ("ind", Tag::from_bytes(b"IND ")), // Indonesian
    ("ing", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("inh", Tag::from_bytes(b"ING ")), // Ingush
    ("ipk", Tag::from_bytes(b"IPK ")), // Inupiat
    ("isl", Tag::from_bytes(b"ISL ")), // Icelandic
    ("ita", Tag::from_bytes(b"ITA ")), // Italian
    ("itz", Tag::from_bytes(b"MYN ")), // Mayan
    ("ixl", Tag::from_bytes(b"MYN ")), // Mayan
    ("jac", Tag::from_bytes(b"MYN ")), // Mayan
    ("jam", Tag::from_bytes(b"CPP ")), // Creoles
    ("jam", Tag::from_bytes(b"JAM ")), // Jamaican Creole
    ("jav", Tag::from_bytes(b"JAV ")), // Javanese
    ("jbe", Tag::from_bytes(b"BBR ")), // Berber
    ("jbn", Tag::from_bytes(b"BBR ")), // Berber
    ("jbo", Tag::from_bytes(b"JBO ")), // Lojban
    ("jct", Tag::from_bytes(b"JCT ")), // Krymchak
    ("jgo", Tag::from_bytes(b"BML ")), // Bamileke
    ("jkm", Tag::from_bytes(b"KRN ")), // Karen
    ("jkp", Tag::from_bytes(b"KRN ")), // Karen
    ("jpn", Tag::from_bytes(b"JAN ")), // Japanese
    ("jvd", Tag::from_bytes(b"CPP ")), // Creoles
    ("kaa", Tag::from_bytes(b"KRK ")), // Karakalpak
    ("kab", Tag::from_bytes(b"BBR ")), // Berber
    ("kab", Tag::from_bytes(b"KAB0")), // Kabyle
    ("kal", Tag::from_bytes(b"GRN ")), // Greenlandic
    ("kam", Tag::from_bytes(b"KMB ")), // Kamba
    ("kan", Tag::from_bytes(b"KAN ")), // Kannada
    ("kar", Tag::from_bytes(b"KRN ")), // Karen
    ("kas", Tag::from_bytes(b"KSH ")), // Kashmiri
    ("kat", Tag::from_bytes(b"KAT ")), // Georgian
    ("kat", Tag::from_bytes(b"KGE ")), // Khutsuri Georgian
    ("kau", Tag::from_bytes(b"KNR ")), // Kanuri
    ("kaz", Tag::from_bytes(b"KAZ ")), // Kazakh
    ("kbd", Tag::from_bytes(b"KAB ")), // Kabardian
    ("kca", Tag::from_bytes(b"KHK ")), // Khanty-Kazim
    ("kca", Tag::from_bytes(b"KHS ")), // Khanty-Shurishkar
    ("kca", Tag::from_bytes(b"KHV ")), // Khanty-Vakhi
    ("kcn", Tag::from_bytes(b"CPP ")), // Creoles
    ("kde", Tag::from_bytes(b"KDE ")), // Makonde
    ("kdr", Tag::from_bytes(b"KRM ")), // Karaim
    ("kdt", Tag::from_bytes(b"KUY ")), // Kuy
    ("kea", Tag::from_bytes(b"CPP ")), // Creoles
    ("kea", Tag::from_bytes(b"KEA ")), // Kabuverdianu (Crioulo)
    ("kek", Tag::from_bytes(b"KEK ")), // Kekchi
    ("kek", Tag::from_bytes(b"MYN ")), // Mayan
    ("kex", Tag::from_bytes(b"KKN ")), // Kokni
    ("kfa", Tag::from_bytes(b"KOD ")), // Kodagu
    ("kfr", Tag::from_bytes(b"KAC ")), // Kachchi
    ("kfx", Tag::from_bytes(b"KUL ")), // Kulvi
    ("kfy", Tag::from_bytes(b"KMN ")), // Kumaoni
    ("kha", Tag::from_bytes(b"KSI ")), // Khasi
    ("khb", Tag::from_bytes(b"XBD ")), // Lu
    ("khm", Tag::from_bytes(b"KHM ")), // Khmer
    ("kht", Tag::from_bytes(b"KHT ")), // Khamti Shan
    ("khw", Tag::from_bytes(b"KHW ")), // Khowar
    ("kik", Tag::from_bytes(b"KIK ")), // Kikuyu (Gikuyu)
    ("kin", Tag::from_bytes(b"RUA ")), // Kinyarwanda
    ("kir", Tag::from_bytes(b"KIR ")), // Kirghiz (Kyrgyz)
    ("kiu", Tag::from_bytes(b"KIU ")), // Kirmanjki
    ("kjb", Tag::from_bytes(b"MYN ")), // Mayan
    ("kjd", Tag::from_bytes(b"KJD ")), // Southern Kiwai
    ("kjh", Tag::from_bytes(b"KHA ")), // Khakass
    ("kjp", Tag::from_bytes(b"KJP ")), // Eastern Pwo Karen
    ("kjp", Tag::from_bytes(b"KRN ")), // Karen
    ("kjt", Tag::from_bytes(b"KRN ")), // Karen
    ("kjz", Tag::from_bytes(b"KJZ ")), // Bumthangkha
    ("kkz", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("kln", Tag::from_bytes(b"KAL ")), // Kalenjin
    ("kmb", Tag::from_bytes(b"MBN ")), // Mbundu
    ("kmv", Tag::from_bytes(b"CPP ")), // Creoles
    ("kmw", Tag::from_bytes(b"KMO ")), // Komo
    ("kmz", Tag::from_bytes(b"KMZ ")), // Khorasani Turkic
    ("knj", Tag::from_bytes(b"MYN ")), // Mayan
    ("koi", Tag::from_bytes(b"KOP ")), // Komi-Permyak
    ("kok", Tag::from_bytes(b"KOK ")), // Konkani
    ("kom", Tag::from_bytes(b"KOM ")), // Komi
    ("kon", Tag::from_bytes(b"KON0")), // Kongo
    ("kor", Tag::from_bytes(b"KOH ")), // Korean Old Hangul
    ("kor", Tag::from_bytes(b"KOR ")), // Korean
    ("kos", Tag::from_bytes(b"KOS ")), // Kosraean
    ("koy", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("kpe", Tag::from_bytes(b"KPL ")), // Kpelle
    ("kpv", Tag::from_bytes(b"KOZ ")), // Komi-Zyrian
    ("kpy", Tag::from_bytes(b"KYK ")), // Koryak
    ("kqs", Tag::from_bytes(b"KIS ")), // Kisii
    ("kqy", Tag::from_bytes(b"KRT ")), // Koorete
    ("krc", Tag::from_bytes(b"BAL ")), // Balkar
    ("krc", Tag::from_bytes(b"KAR ")), // Karachay
    ("kri", Tag::from_bytes(b"CPP ")), // Creoles
    ("kri", Tag::from_bytes(b"KRI ")), // Krio
    ("krl", Tag::from_bytes(b"KRL ")), // Karelian
    ("kru", Tag::from_bytes(b"KUU ")), // Kurukh
    ("ksh", Tag::from_bytes(b"KSH0")), // Ripuarian
    ("kss", Tag::from_bytes(b"KIS ")), // Kisii
    ("ksw", Tag::from_bytes(b"KRN ")), // Karen
    ("ksw", Tag::from_bytes(b"KSW ")), // Sgaw Karen
    ("ktb", Tag::from_bytes(b"KEB ")), // Kebena
    ("ktu", Tag::from_bytes(b"KON ")), // Kikongo
    ("ktw", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("kua", Tag::from_bytes(b"KUA ")), // Kuanyama
    ("kum", Tag::from_bytes(b"KUM ")), // Kumyk
    ("kur", Tag::from_bytes(b"KUR ")), // Kurdish
    ("kuu", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("kuw", Tag::from_bytes(b"BAD0")), // Banda
    ("kvl", Tag::from_bytes(b"KRN ")), // Karen
    ("kvq", Tag::from_bytes(b"KRN ")), // Karen
    ("kvt", Tag::from_bytes(b"KRN ")), // Karen
    ("kvu", Tag::from_bytes(b"KRN ")), // Karen
    ("kvy", Tag::from_bytes(b"KRN ")), // Karen
    ("kww", Tag::from_bytes(b"CPP ")), // Creoles
    ("kxc", Tag::from_bytes(b"KMS ")), // Komso
    ("kxf", Tag::from_bytes(b"KRN ")), // Karen
    ("kxk", Tag::from_bytes(b"KRN ")), // Karen
    ("kxu", Tag::from_bytes(b"KUI ")), // Kui
    ("kyu", Tag::from_bytes(b"KRN ")), // Karen
    ("kyu", Tag::from_bytes(b"KYU ")), // Western Kayah
    ("lac", Tag::from_bytes(b"MYN ")), // Mayan
    ("lad", Tag::from_bytes(b"JUD ")), // Ladino
    ("lao", Tag::from_bytes(b"LAO ")), // Lao
    ("lat", Tag::from_bytes(b"LAT ")), // Latin
    ("lav", Tag::from_bytes(b"LVI ")), // Latvian
    ("lbe", Tag::from_bytes(b"LAK ")), // Lak
    ("lbj", Tag::from_bytes(b"LDK ")), // Ladakhi
    ("lbl", Tag::from_bytes(b"BIK ")), // Bikol
    ("lez", Tag::from_bytes(b"LEZ ")), // Lezgi
    ("lif", Tag::from_bytes(b"LMB ")), // Limbu
    ("lij", Tag::from_bytes(b"LIJ ")), // Ligurian
    ("lim", Tag::from_bytes(b"LIM ")), // Limburgish
    ("lin", Tag::from_bytes(b"LIN ")), // Lingala
    ("lir", Tag::from_bytes(b"CPP ")), // Creoles
    ("lis", Tag::from_bytes(b"LIS ")), // Lisu
    ("lit", Tag::from_bytes(b"LTH ")), // Lithuanian
    ("liy", Tag::from_bytes(b"BAD0")), // Banda
    ("ljp", Tag::from_bytes(b"LJP ")), // Lampung
    ("lki", Tag::from_bytes(b"LKI ")), // Laki
    ("lld", Tag::from_bytes(b"LAD ")), // Ladin
    ("lmn", Tag::from_bytes(b"LAM ")), // Lambani
    ("lmo", Tag::from_bytes(b"LMO ")), // Lombard
    ("lna", Tag::from_bytes(b"BAD0")), // Banda
    ("lnl", Tag::from_bytes(b"BAD0")), // Banda
    ("lom", Tag::from_bytes(b"LOM ")), // Loma
    ("lou", Tag::from_bytes(b"CPP ")), // Creoles
    ("lrc", Tag::from_bytes(b"LRC ")), // Luri
    ("lrt", Tag::from_bytes(b"CPP ")), // Creoles
    ("ltz", Tag::from_bytes(b"LTZ ")), // Luxembourgish
    ("lua", Tag::from_bytes(b"LUA ")), // Luba-Lulua
    ("lub", Tag::from_bytes(b"LUB ")), // Luba-Katanga
    ("lug", Tag::from_bytes(b"LUG ")), // Ganda
    ("luo", Tag::from_bytes(b"LUO ")), // Luo
    ("lus", Tag::from_bytes(b"MIZ ")), // Mizo
    ("lus", Tag::from_bytes(b"QIN ")), // Chin
    ("luy", Tag::from_bytes(b"LUH ")), // Luyia
    ("luz", Tag::from_bytes(b"LRC ")), // Luri
    ("lzz", Tag::from_bytes(b"LAZ ")), // Laz
    ("mad", Tag::from_bytes(b"MAD ")), // Madura
    ("mag", Tag::from_bytes(b"MAG ")), // Magahi
    ("mah", Tag::from_bytes(b"MAH ")), // Marshallese
    ("mai", Tag::from_bytes(b"MTH ")), // Maithili
    ("mak", Tag::from_bytes(b"MKR ")), // Makasar
    ("mal", Tag::from_bytes(b"MAL ")), // Malayalam
    ("mal", Tag::from_bytes(b"MLR ")), // Malayalam Reformed
    ("mam", Tag::from_bytes(b"MAM ")), // Mam
    ("mam", Tag::from_bytes(b"MYN ")), // Mayan
    ("man", Tag::from_bytes(b"MNK ")), // Maninka
    ("mar", Tag::from_bytes(b"MAR ")), // Marathi
    ("max", Tag::from_bytes(b"CPP ")), // Creoles
    ("mbf", Tag::from_bytes(b"CPP ")), // Creoles
    ("mbo", Tag::from_bytes(b"MBO ")), // Mbo
    ("mcm", Tag::from_bytes(b"CPP ")), // Creoles
    ("mct", Tag::from_bytes(b"BTI ")), // Beti
    ("mdf", Tag::from_bytes(b"MOK ")), // Moksha
    ("mdr", Tag::from_bytes(b"MDR ")), // Mandar
    ("mdy", Tag::from_bytes(b"MLE ")), // Male
    ("men", Tag::from_bytes(b"MDE ")), // Mende
    ("mer", Tag::from_bytes(b"MER ")), // Meru
    ("mfa", Tag::from_bytes(b"MFA ")), // Pattani Malay
    ("mfe", Tag::from_bytes(b"CPP ")), // Creoles
    ("mfe", Tag::from_bytes(b"MFE ")), // Morisyen
    ("mfp", Tag::from_bytes(b"CPP ")), // Creoles
    ("mhc", Tag::from_bytes(b"MYN ")), // Mayan
    ("mhr", Tag::from_bytes(b"LMA ")), // Low Mari
    ("mhv", Tag::from_bytes(b"ARK ")), // Rakhine
    ("min", Tag::from_bytes(b"MIN ")), // Minangkabau
    ("mkd", Tag::from_bytes(b"MKD ")), // Macedonian
    ("mkn", Tag::from_bytes(b"CPP ")), // Creoles
    ("mku", Tag::from_bytes(b"MNK ")), // Maninka
    ("mkw", Tag::from_bytes(b"MKW ")), // Kituba
    ("mlg", Tag::from_bytes(b"MLG ")), // Malagasy
    ("mlq", Tag::from_bytes(b"MLN ")), // Malinke
    ("mlq", Tag::from_bytes(b"MNK ")), // Maninka
    ("mlt", Tag::from_bytes(b"MTS ")), // Maltese
    ("mnc", Tag::from_bytes(b"MCH ")), // Manchu
    ("mnh", Tag::from_bytes(b"BAD0")), // Banda
    ("mni", Tag::from_bytes(b"MNI ")), // Manipuri
    ("mnk", Tag::from_bytes(b"MND ")), // Mandinka
    ("mnk", Tag::from_bytes(b"MNK ")), // Maninka
    ("mns", Tag::from_bytes(b"MAN ")), // Mansi
    ("mnw", Tag::from_bytes(b"MON ")), // Mon
    ("mod", Tag::from_bytes(b"CPP ")), // Creoles
    ("moh", Tag::from_bytes(b"MOH ")), // Mohawk
    ("mol", Tag::from_bytes(b"MOL ")), // Moldavian
    ("mon", Tag::from_bytes(b"MNG ")), // Mongolian
    ("mop", Tag::from_bytes(b"MYN ")), // Mayan
    ("mos", Tag::from_bytes(b"MOS ")), // Mossi
    ("mpe", Tag::from_bytes(b"MAJ ")), // Majang
    ("mrh", Tag::from_bytes(b"QIN ")), // Chin
    ("mri", Tag::from_bytes(b"MRI ")), // Maori
    ("mrj", Tag::from_bytes(b"HMA ")), // High Mari
    ("msa", Tag::from_bytes(b"MLY ")), // Malay
    ("msc", Tag::from_bytes(b"MNK ")), // Maninka
    ("msi", Tag::from_bytes(b"CPP ")), // Creoles
    ("mtr", Tag::from_bytes(b"MAW ")), // Marwari
    ("mud", Tag::from_bytes(b"CPP ")), // Creoles
    ("mus", Tag::from_bytes(b"MUS ")), // Muscogee
    ("mvb", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("mve", Tag::from_bytes(b"MAW ")), // Marwari
    ("mwk", Tag::from_bytes(b"MNK ")), // Maninka
    ("mwl", Tag::from_bytes(b"MWL ")), // Mirandese
    ("mwq", Tag::from_bytes(b"QIN ")), // Chin
    ("mwr", Tag::from_bytes(b"MAW ")), // Marwari
    ("mww", Tag::from_bytes(b"MWW ")), // Hmong Daw
    ("mya", Tag::from_bytes(b"BRM ")), // Burmese
    ("mym", Tag::from_bytes(b"MEN ")), // Meen
    ("myn", Tag::from_bytes(b"MYN ")), // Mayan
    ("myq", Tag::from_bytes(b"MNK ")), // Maninka
    ("myv", Tag::from_bytes(b"ERZ ")), // Erzya
    ("mzb", Tag::from_bytes(b"BBR ")), // Berber
    ("mzn", Tag::from_bytes(b"MZN ")), // Mazanderani
    ("mzs", Tag::from_bytes(b"CPP ")), // Creoles
    ("nag", Tag::from_bytes(b"CPP ")), // Creoles
    ("nag", Tag::from_bytes(b"NAG ")), // Naga-Assamese
    ("nah", Tag::from_bytes(b"NAH ")), // Nahuatl
    ("nap", Tag::from_bytes(b"NAP ")), // Neapolitan
    ("nau", Tag::from_bytes(b"NAU ")), // Nauruan
    ("nav", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("nav", Tag::from_bytes(b"NAV ")), // Navajo
    ("naz", Tag::from_bytes(b"NAH ")), // Nahuatl
    ("nbl", Tag::from_bytes(b"NDB ")), // Ndebele
    ("nch", Tag::from_bytes(b"NAH ")), // Nahuatl
    ("nci", Tag::from_bytes(b"NAH ")), // Nahuatl
    ("ncj", Tag::from_bytes(b"NAH ")), // Nahuatl
    ("ncl", Tag::from_bytes(b"NAH ")), // Nahuatl
    ("ncx", Tag::from_bytes(b"NAH ")), // Nahuatl
    ("ndc", Tag::from_bytes(b"NDC ")), // Ndau
    ("nde", Tag::from_bytes(b"NDB ")), // Ndebele
    ("ndo", Tag::from_bytes(b"NDG ")), // Ndonga
    ("nds", Tag::from_bytes(b"NDS ")), // Low Saxon
    ("nef", Tag::from_bytes(b"CPP ")), // Creoles
    ("nep", Tag::from_bytes(b"NEP ")), // Nepali
    ("new", Tag::from_bytes(b"NEW ")), // Newari
    ("nga", Tag::from_bytes(b"NGA ")), // Ngbaka
    ("ngl", Tag::from_bytes(b"LMW ")), // Lomwe
    ("ngm", Tag::from_bytes(b"CPP ")), // Creoles
    ("ngo", Tag::from_bytes(b"SXT ")), // Sutu
    ("ngu", Tag::from_bytes(b"NAH ")), // Nahuatl
    ("nhc", Tag::from_bytes(b"NAH ")), // Nahuatl
    ("nhe", Tag::from_bytes(b"NAH ")), // Nahuatl
    ("nhg", Tag::from_bytes(b"NAH ")), // Nahuatl
    ("nhi", Tag::from_bytes(b"NAH ")), // Nahuatl
    ("nhk", Tag::from_bytes(b"NAH ")), // Nahuatl
    ("nhm", Tag::from_bytes(b"NAH ")), // Nahuatl
    ("nhn", Tag::from_bytes(b"NAH ")), // Nahuatl
    ("nhp", Tag::from_bytes(b"NAH ")), // Nahuatl
    ("nhq", Tag::from_bytes(b"NAH ")), // Nahuatl
    ("nht", Tag::from_bytes(b"NAH ")), // Nahuatl
    ("nhv", Tag::from_bytes(b"NAH ")), // Nahuatl
    ("nhw", Tag::from_bytes(b"NAH ")), // Nahuatl
    ("nhx", Tag::from_bytes(b"NAH ")), // Nahuatl
    ("nhy", Tag::from_bytes(b"NAH ")), // Nahuatl
    ("nhz", Tag::from_bytes(b"NAH ")), // Nahuatl
    ("niu", Tag::from_bytes(b"NIU ")), // Niuean
    ("niv", Tag::from_bytes(b"GIL ")), // Gilyak
    ("njt", Tag::from_bytes(b"CPP ")), // Creoles
    ("njz", Tag::from_bytes(b"NIS ")), // Nisi
    ("nkx", Tag::from_bytes(b"IJO ")), // Ijo languages
    ("nla", Tag::from_bytes(b"BML ")), // Bamileke
    ("nld", Tag::from_bytes(b"NLD ")), // Dutch
    ("nlv", Tag::from_bytes(b"NAH ")), // Nahuatl
    ("nnh", Tag::from_bytes(b"BML ")), // Bamileke
    ("nno", Tag::from_bytes(b"NYN ")), // Norwegian Nynorsk (Nynorsk, Norwegian)
    ("nnz", Tag::from_bytes(b"BML ")), // Bamileke
    ("nob", Tag::from_bytes(b"NOR ")), // Norwegian
    ("nod", Tag::from_bytes(b"NTA ")), // Northern Tai
    ("noe", Tag::from_bytes(b"NOE ")), // Nimadi
    ("nog", Tag::from_bytes(b"NOG ")), // Nogai
    ("nov", Tag::from_bytes(b"NOV ")), // Novial
    ("npl", Tag::from_bytes(b"NAH ")), // Nahuatl
    ("nqo", Tag::from_bytes(b"NKO ")), // NKo
    ("nsk", Tag::from_bytes(b"NAS ")), // Naskapi
    ("nso", Tag::from_bytes(b"NSO ")), // Northern Sotho
    ("nsu", Tag::from_bytes(b"NAH ")), // Nahuatl
    ("nue", Tag::from_bytes(b"BAD0")), // Banda
    ("nuu", Tag::from_bytes(b"BAD0")), // Banda
    ("nuz", Tag::from_bytes(b"NAH ")), // Nahuatl
    ("nwe", Tag::from_bytes(b"BML ")), // Bamileke
    ("nya", Tag::from_bytes(b"CHI ")), // Chichewa (Chewa, Nyanja)
    ("nym", Tag::from_bytes(b"NYM ")), // Nyamwezi
    ("nyn", Tag::from_bytes(b"NKL ")), // Nyankole
    ("nza", Tag::from_bytes(b"NZA ")), // Mbembe Tigon
    ("oci", Tag::from_bytes(b"OCI ")), // Occitan
    ("oji", Tag::from_bytes(b"OJB ")), // Ojibway
    ("ojs", Tag::from_bytes(b"OCR ")), // Oji-Cree
    ("okd", Tag::from_bytes(b"IJO ")), // Ijo languages
    ("okm", Tag::from_bytes(b"KOH ")), // Korean Old Hangul
    ("okr", Tag::from_bytes(b"IJO ")), // Ijo languages
    ("onx", Tag::from_bytes(b"CPP ")), // Creoles
    ("oor", Tag::from_bytes(b"CPP ")), // Creoles
    ("ori", Tag::from_bytes(b"ORI ")), // Odia (formerly Oriya)
    ("orm", Tag::from_bytes(b"ORO ")), // Oromo
    ("orr", Tag::from_bytes(b"IJO ")), // Ijo languages
    ("oss", Tag::from_bytes(b"OSS ")), // Ossetian
    ("oua", Tag::from_bytes(b"BBR ")), // Berber
    ("pag", Tag::from_bytes(b"PAG ")), // Pangasinan
    ("pam", Tag::from_bytes(b"PAM ")), // Pampangan
    ("pan", Tag::from_bytes(b"PAN ")), // Punjabi
    ("pap", Tag::from_bytes(b"CPP ")), // Creoles
    ("pap", Tag::from_bytes(b"PAP0")), // Papiamentu
    ("pau", Tag::from_bytes(b"PAU ")), // Palauan
    ("pcc", Tag::from_bytes(b"PCC ")), // Bouyei
    ("pcd", Tag::from_bytes(b"PCD ")), // Picard
    ("pce", Tag::from_bytes(b"PLG ")), // Palaung
    ("pck", Tag::from_bytes(b"QIN ")), // Chin
    ("pcm", Tag::from_bytes(b"CPP ")), // Creoles
    ("pdc", Tag::from_bytes(b"PDC ")), // Pennsylvania German
    ("pdu", Tag::from_bytes(b"KRN ")), // Karen
    ("pea", Tag::from_bytes(b"CPP ")), // Creoles
    ("pey", Tag::from_bytes(b"CPP ")), // Creoles
    ("pga", Tag::from_bytes(b"CPP ")), // Creoles
    ("phk", Tag::from_bytes(b"PHK ")), // Phake
    ("pih", Tag::from_bytes(b"CPP ")), // Creoles
    ("pih", Tag::from_bytes(b"PIH ")), // Norfolk
    ("pis", Tag::from_bytes(b"CPP ")), // Creoles
    ("pkh", Tag::from_bytes(b"QIN ")), // Chin
    ("pli", Tag::from_bytes(b"PAL ")), // Pali
    ("pll", Tag::from_bytes(b"PLG ")), // Palaung
    ("pln", Tag::from_bytes(b"CPP ")), // Creoles
    ("plp", Tag::from_bytes(b"PAP ")), // Palpa
    ("pml", Tag::from_bytes(b"CPP ")), // Creoles
    ("pms", Tag::from_bytes(b"PMS ")), // Piemontese
    ("pmy", Tag::from_bytes(b"CPP ")), // Creoles
    ("pnb", Tag::from_bytes(b"PNB ")), // Western Panjabi
    ("poc", Tag::from_bytes(b"MYN ")), // Mayan
    ("poh", Tag::from_bytes(b"MYN ")), // Mayan
    ("poh", Tag::from_bytes(b"POH ")), // Pocomchi
    ("pol", Tag::from_bytes(b"PLK ")), // Polish
    ("pon", Tag::from_bytes(b"PON ")), // Pohnpeian
    ("por", Tag::from_bytes(b"PTG ")), // Portuguese
    ("pov", Tag::from_bytes(b"CPP ")), // Creoles
    ("pre", Tag::from_bytes(b"CPP ")), // Creoles
    ("pro", Tag::from_bytes(b"PRO ")), // Provencal / Old Provencal
    ("prs", Tag::from_bytes(b"DRI ")), // Dari
    ("pub", Tag::from_bytes(b"QIN ")), // Chin
    ("pus", Tag::from_bytes(b"PAS ")), // Pashto
    ("pwo", Tag::from_bytes(b"KRN ")), // Karen
    ("pwo", Tag::from_bytes(b"PWO ")), // Western Pwo Karen
    ("pww", Tag::from_bytes(b"KRN ")), // Karen
    ("quc", Tag::from_bytes(b"MYN ")), // Mayan
    ("quc", Tag::from_bytes(b"QUC ")), // Kiche
    ("quh", Tag::from_bytes(b"QUH ")), // Quechua (Bolivia)
    ("qum", Tag::from_bytes(b"MYN ")), // Mayan
    ("quv", Tag::from_bytes(b"MYN ")), // Mayan
    ("quz", Tag::from_bytes(b"QUZ ")), // Quechua
    ("qvi", Tag::from_bytes(b"QVI ")), // Quechua (Ecuador)
    ("qwh", Tag::from_bytes(b"QWH ")), // Quechua (Peru)
    ("qwt", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("raj", Tag::from_bytes(b"RAJ ")), // Rajasthani
    ("ral", Tag::from_bytes(b"QIN ")), // Chin
    ("rar", Tag::from_bytes(b"RAR ")), // Rarotongan
    ("rbb", Tag::from_bytes(b"PLG ")), // Palaung
    ("rbl", Tag::from_bytes(b"BIK ")), // Bikol
    ("rcf", Tag::from_bytes(b"CPP ")), // Creoles
    ("rej", Tag::from_bytes(b"REJ ")), // Rejang
    ("ria", Tag::from_bytes(b"RIA ")), // Riang
    ("rif", Tag::from_bytes(b"BBR ")), // Berber
    ("rif", Tag::from_bytes(b"RIF ")), // Tarifit
    ("rit", Tag::from_bytes(b"RIT ")), // Ritarungo
    ("rki", Tag::from_bytes(b"ARK ")), // Rakhine
    ("rkw", Tag::from_bytes(b"RKW ")), // Arakwal
    ("rmy", Tag::from_bytes(b"RMY ")), // Vlax Romani
    ("rmz", Tag::from_bytes(b"ARK ")), // Rakhine
    ("roh", Tag::from_bytes(b"RMS ")), // Romansh
    ("rom", Tag::from_bytes(b"ROY ")), // Romany
    ("ron", Tag::from_bytes(b"ROM ")), // Romanian
    ("rop", Tag::from_bytes(b"CPP ")), // Creoles
    ("rtc", Tag::from_bytes(b"QIN ")), // Chin
    ("rtm", Tag::from_bytes(b"RTM ")), // Rotuman
    ("rue", Tag::from_bytes(b"RSY ")), // Rusyn
    ("run", Tag::from_bytes(b"RUN ")), // Rundi
    ("rup", Tag::from_bytes(b"RUP ")), // Aromanian
    ("rus", Tag::from_bytes(b"RUS ")), // Russian
    ("rwr", Tag::from_bytes(b"MAW ")), // Marwari
    ("sag", Tag::from_bytes(b"SGO ")), // Sango
    ("sah", Tag::from_bytes(b"YAK ")), // Sakha
    ("sam", Tag::from_bytes(b"PAA ")), // Palestinian Aramaic
    ("san", Tag::from_bytes(b"SAN ")), // Sanskrit
    ("sas", Tag::from_bytes(b"SAS ")), // Sasak
    ("sat", Tag::from_bytes(b"SAT ")), // Santali
    ("scf", Tag::from_bytes(b"CPP ")), // Creoles
    ("sch", Tag::from_bytes(b"QIN ")), // Chin
    ("sci", Tag::from_bytes(b"CPP ")), // Creoles
    ("sck", Tag::from_bytes(b"SAD ")), // Sadri
    ("scn", Tag::from_bytes(b"SCN ")), // Sicilian
    ("sco", Tag::from_bytes(b"SCO ")), // Scots
    ("scs", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("scs", Tag::from_bytes(b"SCS ")), // North Slavey
    ("scs", Tag::from_bytes(b"SLA ")), // Slavey
    ("sds", Tag::from_bytes(b"BBR ")), // Berber
    ("seh", Tag::from_bytes(b"SNA ")), // Sena
    ("sek", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("sel", Tag::from_bytes(b"SEL ")), // Selkup
    ("sez", Tag::from_bytes(b"QIN ")), // Chin
    ("sga", Tag::from_bytes(b"SGA ")), // Old Irish
    ("sgs", Tag::from_bytes(b"SGS ")), // Samogitian
    ("sgw", Tag::from_bytes(b"CHG ")), // Chaha Gurage
    ("shi", Tag::from_bytes(b"BBR ")), // Berber
    ("shi", Tag::from_bytes(b"SHI ")), // Tachelhit
    ("shl", Tag::from_bytes(b"QIN ")), // Chin
    ("shn", Tag::from_bytes(b"SHN ")), // Shan
    ("shy", Tag::from_bytes(b"BBR ")), // Berber
    ("sid", Tag::from_bytes(b"SID ")), // Sidamo
    ("sin", Tag::from_bytes(b"SNH ")), // Sinhala (Sinhalese)
    ("siz", Tag::from_bytes(b"BBR ")), // Berber
    ("sjd", Tag::from_bytes(b"KSM ")), // Kildin Sami
    ("sjo", Tag::from_bytes(b"SIB ")), // Sibe
    ("sjs", Tag::from_bytes(b"BBR ")), // Berber
    ("skr", Tag::from_bytes(b"SRK ")), // Saraiki
    ("skw", Tag::from_bytes(b"CPP ")), // Creoles
    ("slk", Tag::from_bytes(b"SKY ")), // Slovak
    ("slv", Tag::from_bytes(b"SLV ")), // Slovenian
    ("sma", Tag::from_bytes(b"SSM ")), // Southern Sami
    ("sme", Tag::from_bytes(b"NSM ")), // Northern Sami
    ("smj", Tag::from_bytes(b"LSM ")), // Lule Sami
    ("smn", Tag::from_bytes(b"ISM ")), // Inari Sami
    ("smo", Tag::from_bytes(b"SMO ")), // Samoan
    ("sms", Tag::from_bytes(b"SKS ")), // Skolt Sami
    ("smt", Tag::from_bytes(b"QIN ")), // Chin
    ("sna", Tag::from_bytes(b"SNA0")), // Shona
    ("snd", Tag::from_bytes(b"SND ")), // Sindhi
    ("snk", Tag::from_bytes(b"SNK ")), // Soninke
    ("som", Tag::from_bytes(b"SML ")), // Somali
    ("sop", Tag::from_bytes(b"SOP ")), // Songe
    ("sot", Tag::from_bytes(b"SOT ")), // Southern Sotho
    ("spa", Tag::from_bytes(b"ESP ")), // Spanish
    ("sqi", Tag::from_bytes(b"SQI ")), // Albanian
    ("srd", Tag::from_bytes(b"SRD ")), // Sardinian
    ("srm", Tag::from_bytes(b"CPP ")), // Creoles
    ("srn", Tag::from_bytes(b"CPP ")), // Creoles
    ("srp", Tag::from_bytes(b"SRB ")), // Serbian
    ("srr", Tag::from_bytes(b"SRR ")), // Serer
    ("srs", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("ssw", Tag::from_bytes(b"SWZ ")), // Swati
    ("sta", Tag::from_bytes(b"CPP ")), // Creoles
    ("stq", Tag::from_bytes(b"STQ ")), // Saterland Frisian
    ("stv", Tag::from_bytes(b"SIG ")), // Silte Gurage
    ("suk", Tag::from_bytes(b"SUK ")), // Sukuma
    ("sun", Tag::from_bytes(b"SUN ")), // Sundanese
    ("suq", Tag::from_bytes(b"SUR ")), // Suri
    ("sva", Tag::from_bytes(b"SVA ")), // Svan
    ("svc", Tag::from_bytes(b"CPP ")), // Creoles
    ("swa", Tag::from_bytes(b"SWK ")), // Swahili
    ("swb", Tag::from_bytes(b"CMR ")), // Comorian
    ("swe", Tag::from_bytes(b"SVE ")), // Swedish
    ("swn", Tag::from_bytes(b"BBR ")), // Berber
    ("swv", Tag::from_bytes(b"MAW ")), // Marwari
    ("sxu", Tag::from_bytes(b"SXU ")), // Upper Saxon
    ("syc", Tag::from_bytes(b"SYR ")), // Syriac
    ("syc", Tag::from_bytes(b"SYRE")), // Syriac, Estrangela script-variant (equivalent to ISO 15924 'Syre')
    ("syc", Tag::from_bytes(b"SYRJ")), // Syriac, Western script-variant (equivalent to ISO 15924 'Syrj')
    ("syc", Tag::from_bytes(b"SYRN")), // Syriac, Eastern script-variant (equivalent to ISO 15924 'Syrn')
    ("syl", Tag::from_bytes(b"SYL ")), // Sylheti
    ("syr", Tag::from_bytes(b"SYR ")), // Syriac
    ("syr", Tag::from_bytes(b"SYRE")), // Syriac, Estrangela script-variant (equivalent to ISO 15924 'Syre')
    ("syr", Tag::from_bytes(b"SYRJ")), // Syriac, Western script-variant (equivalent to ISO 15924 'Syrj')
    ("syr", Tag::from_bytes(b"SYRN")), // Syriac, Eastern script-variant (equivalent to ISO 15924 'Syrn')
    ("szl", Tag::from_bytes(b"SZL ")), // Silesian
    ("taa", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("tab", Tag::from_bytes(b"TAB ")), // Tabasaran
    ("tah", Tag::from_bytes(b"THT ")), // Tahitian
    ("tam", Tag::from_bytes(b"TAM ")), // Tamil
    ("taq", Tag::from_bytes(b"BBR ")), // Berber
    ("taq", Tag::from_bytes(b"TMH ")), // Tamashek
    ("tas", Tag::from_bytes(b"CPP ")), // Creoles
    ("tat", Tag::from_bytes(b"TAT ")), // Tatar
    ("tau", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("tcb", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("tce", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("tch", Tag::from_bytes(b"CPP ")), // Creoles
    ("tcp", Tag::from_bytes(b"QIN ")), // Chin
    ("tcs", Tag::from_bytes(b"CPP ")), // Creoles
    ("tcy", Tag::from_bytes(b"TUL ")), // Tumbuka
    ("tcz", Tag::from_bytes(b"QIN ")), // Chin
    ("tdd", Tag::from_bytes(b"TDD ")), // Dehong Dai
    ("tel", Tag::from_bytes(b"TEL ")), // Telugu
    ("tem", Tag::from_bytes(b"TMN ")), // Temne
    ("tet", Tag::from_bytes(b"TET ")), // Tetum
    ("tez", Tag::from_bytes(b"BBR ")), // Berber
    ("tfn", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("tgh", Tag::from_bytes(b"CPP ")), // Creoles
    ("tgj", Tag::from_bytes(b"NIS ")), // Nisi
    ("tgk", Tag::from_bytes(b"TAJ ")), // Tajiki
    ("tgl", Tag::from_bytes(b"TGL ")), // Tagalog
    ("tgx", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("tha", Tag::from_bytes(b"THA ")), // Thai
    ("tht", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("thv", Tag::from_bytes(b"BBR ")), // Berber
    ("thv", Tag::from_bytes(b"TMH ")), // Tamashek
    ("thz", Tag::from_bytes(b"BBR ")), // Berber
    ("thz", Tag::from_bytes(b"TMH ")), // Tamashek
    ("tia", Tag::from_bytes(b"BBR ")), // Berber
    ("tig", Tag::from_bytes(b"TGR ")), // Tigre
    ("tir", Tag::from_bytes(b"TGY ")), // Tigrinya
    ("tiv", Tag::from_bytes(b"TIV ")), // Tiv
    ("tjo", Tag::from_bytes(b"BBR ")), // Berber
    ("tmg", Tag::from_bytes(b"CPP ")), // Creoles
    ("tmh", Tag::from_bytes(b"BBR ")), // Berber
    ("tmh", Tag::from_bytes(b"TMH ")), // Tamashek
    ("tod", Tag::from_bytes(b"TOD0")), // Toma
    ("toi", Tag::from_bytes(b"TNG ")), // Tonga
    ("toj", Tag::from_bytes(b"MYN ")), // Mayan
    ("tol", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("ton", Tag::from_bytes(b"TGN ")), // Tongan
    ("tor", Tag::from_bytes(b"BAD0")), // Banda
    ("tpi", Tag::from_bytes(b"CPP ")), // Creoles
    ("tpi", Tag::from_bytes(b"TPI ")), // Tok Pisin
    ("trf", Tag::from_bytes(b"CPP ")), // Creoles
    ("tru", Tag::from_bytes(b"SYR ")), // Syriac
    ("tru", Tag::from_bytes(b"TUA ")), // Turoyo Aramaic
    ("tsj", Tag::from_bytes(b"TSJ ")), // Tshangla
    ("tsn", Tag::from_bytes(b"TNA ")), // Tswana
    ("tso", Tag::from_bytes(b"TSG ")), // Tsonga
    ("ttc", Tag::from_bytes(b"MYN ")), // Mayan
    ("ttm", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("ttq", Tag::from_bytes(b"BBR ")), // Berber
    ("ttq", Tag::from_bytes(b"TMH ")), // Tamashek
    ("tuk", Tag::from_bytes(b"TKM ")), // Turkmen
    ("tum", Tag::from_bytes(b"TUM ")), // Tulu
    ("tur", Tag::from_bytes(b"TRK ")), // Turkish
    ("tuu", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("tvl", Tag::from_bytes(b"TVL ")), // Tuvalu
    ("tvy", Tag::from_bytes(b"CPP ")), // Creoles
    ("twi", Tag::from_bytes(b"AKA ")), // Akan
    ("twi", Tag::from_bytes(b"TWI ")), // Twi
    ("txc", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("tyv", Tag::from_bytes(b"TUV ")), // Tuvin
    ("tyz", Tag::from_bytes(b"TYZ ")), // Tay
    ("tzh", Tag::from_bytes(b"MYN ")), // Mayan
    ("tzj", Tag::from_bytes(b"MYN ")), // Mayan
    ("tzm", Tag::from_bytes(b"BBR ")), // Berber
    ("tzm", Tag::from_bytes(b"TZM ")), // Tamazight
    ("tzo", Tag::from_bytes(b"MYN ")), // Mayan
    ("tzo", Tag::from_bytes(b"TZO ")), // Tzotzil
    ("ubl", Tag::from_bytes(b"BIK ")), // Bikol
    ("udm", Tag::from_bytes(b"UDM ")), // Udmurt
    ("uig", Tag::from_bytes(b"UYG ")), // Uyghur
    ("ukr", Tag::from_bytes(b"UKR ")), // Ukrainian
    ("uln", Tag::from_bytes(b"CPP ")), // Creoles
    ("umb", Tag::from_bytes(b"UMB ")), // Umbundu
    ("unr", Tag::from_bytes(b"MUN ")), // Mundari
    ("urd", Tag::from_bytes(b"URD ")), // Urdu
    ("usp", Tag::from_bytes(b"MYN ")), // Mayan
    ("uzb", Tag::from_bytes(b"UZB ")), // Uzbek
    ("vap", Tag::from_bytes(b"QIN ")), // Chin
    ("vec", Tag::from_bytes(b"VEC ")), // Venetian
    ("ven", Tag::from_bytes(b"VEN ")), // Venda
    ("vic", Tag::from_bytes(b"CPP ")), // Creoles
    ("vie", Tag::from_bytes(b"VIT ")), // Vietnamese
    ("vkp", Tag::from_bytes(b"CPP ")), // Creoles
    ("vls", Tag::from_bytes(b"FLE ")), // Dutch (Flemish)
    ("vmw", Tag::from_bytes(b"MAK ")), // Makhuwa
    ("vol", Tag::from_bytes(b"VOL ")), // Volapuk
    ("vro", Tag::from_bytes(b"VRO ")), // Voro
    ("war", Tag::from_bytes(b"WAR ")), // Waray-Waray
    ("wbm", Tag::from_bytes(b"WA  ")), // Wa
    ("wbr", Tag::from_bytes(b"WAG ")), // Wagdi
    ("wea", Tag::from_bytes(b"KRN ")), // Karen
    ("wes", Tag::from_bytes(b"CPP ")), // Creoles
    ("weu", Tag::from_bytes(b"QIN ")), // Chin
    ("wlc", Tag::from_bytes(b"CMR ")), // Comorian
    ("wle", Tag::from_bytes(b"SIG ")), // Silte Gurage
    ("wlk", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("wln", Tag::from_bytes(b"WLN ")), // Walloon
    ("wni", Tag::from_bytes(b"CMR ")), // Comorian
    ("wol", Tag::from_bytes(b"WLF ")), // Wolof
    ("wry", Tag::from_bytes(b"MAW ")), // Marwari
    ("wtm", Tag::from_bytes(b"WTM ")), // Mewati
    ("xal", Tag::from_bytes(b"KLM ")), // Kalmyk
    ("xal", Tag::from_bytes(b"TOD ")), // Todo
    ("xan", Tag::from_bytes(b"SEK ")), // Sekota
    ("xho", Tag::from_bytes(b"XHS ")), // Xhosa
    ("xjb", Tag::from_bytes(b"XJB ")), // Minjangbal
    ("xkf", Tag::from_bytes(b"XKF ")), // Khengkha
    ("xmg", Tag::from_bytes(b"BML ")), // Bamileke
    ("xmm", Tag::from_bytes(b"CPP ")), // Creoles
    ("xnj", Tag::from_bytes(b"SXT ")), // Sutu
    ("xnq", Tag::from_bytes(b"SXT ")), // Sutu
    ("xog", Tag::from_bytes(b"XOG ")), // Soga
    ("xpe", Tag::from_bytes(b"XPE ")), // Kpelle (Liberia)
    ("xsl", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("xsl", Tag::from_bytes(b"SLA ")), // Slavey
    ("xsl", Tag::from_bytes(b"SSL ")), // South Slavey
    ("xst", Tag::from_bytes(b"SIG ")), // Silte Gurage
    ("xup", Tag::from_bytes(b"ATH ")), // Athapaskan languages
    ("yaj", Tag::from_bytes(b"BAD0")), // Banda
    ("yao", Tag::from_bytes(b"YAO ")), // Yao
    ("yap", Tag::from_bytes(b"YAP ")), // Yapese
    ("ybb", Tag::from_bytes(b"BML ")), // Bamileke
    ("yid", Tag::from_bytes(b"JII ")), // Yiddish
    ("yor", Tag::from_bytes(b"YBA ")), // Yoruba
    ("yua", Tag::from_bytes(b"MYN ")), // Mayan
    ("zdj", Tag::from_bytes(b"CMR ")), // Comorian
    ("zea", Tag::from_bytes(b"ZEA ")), // Zealandic
    ("zen", Tag::from_bytes(b"BBR ")), // Berber
    ("zgh", Tag::from_bytes(b"BBR ")), // Berber
    ("zgh", Tag::from_bytes(b"ZGH ")), // Standard Moroccan Tamazight
    ("zha", Tag::from_bytes(b"ZHA ")), // Zhuang
    ("zho", Tag::from_bytes(b"ZHS ")), // Chinese, Simplified
    ("zho", Tag::from_bytes(b"ZHT ")), // Chinese, Traditional
    ("zho", Tag::from_bytes(b"ZHH ")), // Chinese, Traditional, Hong Kong SAR
    ("zho", Tag::from_bytes(b"ZHTM")), // Chinese, Traditional, Macao SAR
    ("zho", Tag::from_bytes(b"ZHP ")), // Chinese, Phonetic
    ("zmz", Tag::from_bytes(b"BAD0")), // Banda
    ("zne", Tag::from_bytes(b"ZND ")), // Zande
    ("zom", Tag::from_bytes(b"QIN ")), // Chin
    ("zul", Tag::from_bytes(b"ZUL ")), // Zulu
    ("zum", Tag::from_bytes(b"LRC ")), // Luri
    ("zyp", Tag::from_bytes(b"QIN ")), // Chin
    ("zza", Tag::from_bytes(b"ZZA ")), // Zazaki
];
